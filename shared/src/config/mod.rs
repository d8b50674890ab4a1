//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized by business area:
//! - `auth` - Authentication and account lockout configuration

pub mod auth;

pub use auth::{AuthConfig, LockoutConfig};
