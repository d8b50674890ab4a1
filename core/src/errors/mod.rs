//! Domain-specific error types and error handling.

mod auth_error;

pub use auth_error::{AuthError, ErrorResponse};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Optimistic-concurrency version mismatch; retried once at the
    /// persistence boundary, never shown to the caller as-is.
    #[error("Version conflict updating {resource}")]
    Conflict { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the caller-visible authentication errors
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;
