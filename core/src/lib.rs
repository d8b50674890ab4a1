//! # NoticeBoard Core
//!
//! Core business logic and domain layer for the NoticeBoard backend.
//! This crate contains the authentication core: account resolution for
//! non-unique login identifiers, failed-login lockout tracking, and the
//! login orchestration service, together with the repository interfaces
//! and error types they depend on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
