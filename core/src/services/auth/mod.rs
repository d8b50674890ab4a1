//! Authentication service module
//!
//! This module provides the authentication core:
//! - Account resolution for non-unique email/phone identifiers
//! - Failed-login lockout tracking with a configurable threshold
//! - The login orchestration service and administrative unlock

mod config;
mod credential;
mod lockout;
mod matcher;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use credential::{BcryptVerifier, CredentialVerifier};
pub use lockout::LockoutTracker;
pub use matcher::{AccountMatcher, MatchError};
pub use service::AuthService;
