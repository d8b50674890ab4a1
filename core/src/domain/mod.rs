//! Domain layer: entities and value objects for the authentication core.

pub mod entities;
pub mod value_objects;
