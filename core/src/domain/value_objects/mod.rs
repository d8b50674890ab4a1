pub mod login;

pub use login::{LoginRequest, Session};
