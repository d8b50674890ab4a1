//! Credential verification trait and the bcrypt-backed implementation.

use crate::errors::{DomainError, DomainResult};

/// Verification of a plaintext credential against a stored hash.
///
/// The hashing algorithm is a deployment choice behind this trait; the login
/// orchestrator only ever sees the boolean outcome.
pub trait CredentialVerifier: Send + Sync {
    /// Check a plaintext credential against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Credential matches
    /// * `Ok(false)` - Credential does not match
    /// * `Err(DomainError)` - The stored hash is malformed or verification
    ///   itself failed
    fn verify(&self, credential_hash: &str, plaintext: &str) -> DomainResult<bool>;
}

/// Bcrypt-backed credential verifier
pub struct BcryptVerifier;

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, credential_hash: &str, plaintext: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, credential_hash).map_err(|e| DomainError::Internal {
            message: format!("credential verification failed: {}", e),
        })
    }
}
