//! Per-account lockout state tracking consecutive failed login attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable lockout bookkeeping attached to an account.
///
/// Invariant: `locked_at` is set if and only if `failed_attempts` has reached
/// the configured threshold. The state resets to all-zero on successful login
/// or explicit unlock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutState {
    /// Consecutive failed login attempts since the last reset
    pub failed_attempts: u32,

    /// Timestamp of the lock transition, `None` while unlocked
    pub locked_at: Option<DateTime<Utc>>,

    /// Timestamp of the most recent failed attempt
    pub last_failed_at: Option<DateTime<Utc>>,
}

impl LockoutState {
    /// Whether the account is currently locked
    pub fn is_locked(&self) -> bool {
        self.locked_at.is_some()
    }

    /// Records one failed attempt.
    ///
    /// Returns `true` exactly when this call performed the unlocked-to-locked
    /// transition. Locked state is a fixed point: further failures do not
    /// increase the counter.
    pub fn apply_failure(&mut self, threshold: u32, now: DateTime<Utc>) -> bool {
        if self.is_locked() {
            return false;
        }

        self.failed_attempts += 1;
        self.last_failed_at = Some(now);

        if self.failed_attempts >= threshold {
            self.locked_at = Some(now);
            true
        } else {
            false
        }
    }

    /// Resets to the zero state. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks the lock/counter invariant against a threshold
    pub fn holds_invariant(&self, threshold: u32) -> bool {
        self.is_locked() == (self.failed_attempts >= threshold)
    }
}

/// Lockout state together with its optimistic-concurrency version.
///
/// Stores hand out the version on load; a save succeeds only when the
/// version has not moved in the meantime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionedLockout {
    pub state: LockoutState,
    pub version: u64,
}
