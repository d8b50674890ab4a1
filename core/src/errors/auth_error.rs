//! Caller-visible authentication errors and their wire mapping.
//!
//! The error taxonomy is deliberately coarse at the wire boundary: an unknown
//! account, a wrong credential and an unconfigured credential all surface as
//! `INVALID_CREDENTIALS`, so callers cannot enumerate accounts. The finer
//! distinctions survive only in logs and emitted events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors returned as typed results, never thrown as generic
/// exceptions, so the HTTP layer can map them to stable status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown account or wrong credential; generic by design
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The email matches more than one account; a phone number is needed to
    /// disambiguate. Not an authentication failure per se.
    #[error("Multiple accounts use this email; please provide a phone number")]
    PhoneRequired,

    /// The account exists but has not completed activation
    #[error("Account has not been activated")]
    AccountInactive,

    /// The failed-attempt threshold was reached
    #[error("Account is locked due to too many failed login attempts")]
    AccountLockedOut,

    /// No usable credential is configured for the account. Logged distinctly
    /// but indistinguishable from `InvalidCredentials` on the wire.
    #[error("Invalid email or password")]
    CredentialNotSet,
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::PhoneRequired => "PHONE_REQUIRED",
            AuthError::AccountInactive => "ACCOUNT_INACTIVE",
            AuthError::AccountLockedOut => "ACCOUNT_LOCKED_OUT",
            // Same wire code as InvalidCredentials so callers cannot tell
            // an unconfigured credential from a wrong one
            AuthError::CredentialNotSet => "INVALID_CREDENTIALS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert DomainError to ErrorResponse
impl From<super::DomainError> for ErrorResponse {
    fn from(err: super::DomainError) -> Self {
        use super::DomainError;

        match err {
            DomainError::Auth(auth) => auth.into(),
            DomainError::Validation { message } => {
                ErrorResponse::new("VALIDATION_ERROR", message)
            }
            DomainError::NotFound { resource } => ErrorResponse::new(
                "NOT_FOUND",
                format!("Resource not found: {}", resource),
            ),
            // Infrastructure failures carry no detail to the caller
            DomainError::Conflict { .. } | DomainError::Internal { .. } => {
                ErrorResponse::new("SERVER_ERROR", "An internal error occurred")
            }
        }
    }
}
