//! Lockout state persistence trait with optimistic concurrency.
//!
//! The failed-attempt counter is a shared mutable value: two concurrent
//! failed logins against the same account must both be counted and the lock
//! transition must fire exactly once. Rather than holding a lock across the
//! read-modify-write, stores hand out a version on load and reject saves
//! whose expected version has moved.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::lockout::{LockoutState, VersionedLockout};
use crate::errors::DomainError;

/// Persistence capability for per-account lockout state.
///
/// Implementations must bound their own I/O timeouts and surface failures as
/// `DomainError::Internal`; the core retries a conflicting save once and
/// never retries other failures.
#[async_trait]
pub trait LockoutStore: Send + Sync {
    /// Load the lockout state for an account.
    ///
    /// Accounts that have never failed a login yield the zero state at
    /// version 0; loading never fails for an unknown account.
    async fn load(&self, account_uuid: Uuid) -> Result<VersionedLockout, DomainError>;

    /// Save the lockout state, guarded by the version observed at load time.
    ///
    /// # Returns
    /// * `Ok(())` - State persisted, version advanced
    /// * `Err(DomainError::Conflict)` - Another writer advanced the version
    ///   first; the caller should reload and reapply
    /// * `Err(DomainError)` - Database or other error occurred
    async fn save(
        &self,
        account_uuid: Uuid,
        state: &LockoutState,
        expected_version: u64,
    ) -> Result<(), DomainError>;
}
