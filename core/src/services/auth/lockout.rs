//! Lockout tracker: the per-account failed-attempt state machine.
//!
//! The tracker is stateless; all lockout state lives in the `LockoutStore`
//! and is loaded and stored per call. The threshold is fixed when the tracker
//! is constructed.
//!
//! Concurrency: the read-increment-write sequence is guarded by the store's
//! optimistic version check. On a conflict the tracker reloads and re-applies
//! exactly once; a second conflict surfaces as a generic internal error. Two
//! concurrent failures on one account are therefore both counted, and the
//! lock transition fires exactly once.

use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::entities::account::Account;
use crate::domain::entities::event::{AuthEvent, AuthEventType};
use crate::domain::entities::lockout::{LockoutState, VersionedLockout};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::LockoutStore;
use crate::services::events::EventSink;

/// Service tracking consecutive failed login attempts per account
pub struct LockoutTracker<S, E>
where
    S: LockoutStore,
    E: EventSink,
{
    /// Persistence for lockout state
    store: Arc<S>,
    /// Sink for failed-attempt and lock-transition observations
    events: Arc<E>,
    /// Consecutive failures that trigger the lock
    threshold: u32,
}

impl<S, E> LockoutTracker<S, E>
where
    S: LockoutStore,
    E: EventSink,
{
    /// Create a new lockout tracker with a fixed threshold
    pub fn new(store: Arc<S>, events: Arc<E>, threshold: u32) -> Self {
        Self {
            store,
            events,
            threshold,
        }
    }

    /// The configured failed-login threshold
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether the account is currently locked
    pub async fn is_locked(&self, account: &Account) -> DomainResult<bool> {
        let loaded = self.store.load(account.uuid).await?;
        Ok(loaded.state.is_locked())
    }

    /// Current lockout state for the account
    pub async fn state(&self, account: &Account) -> DomainResult<LockoutState> {
        Ok(self.store.load(account.uuid).await?.state)
    }

    /// Record one failed login attempt.
    ///
    /// Already-locked accounts are left untouched: the counter does not grow
    /// and nothing is emitted (reporting the locked outcome to the caller is
    /// the orchestrator's job). Otherwise the counter is incremented, the
    /// lock transition applied when the threshold is reached, and a
    /// `FAILED_ATTEMPT` observation emitted - plus a distinct `LOCKED_OUT`
    /// observation exactly when the transition happened on this call.
    pub async fn record_failure(&self, account: &Account) -> DomainResult<LockoutState> {
        let loaded = self.store.load(account.uuid).await?;
        if loaded.state.is_locked() {
            return Ok(loaded.state);
        }

        let (state, just_locked) = match self.apply_and_save(account, loaded).await {
            Ok(outcome) => outcome,
            Err(DomainError::Conflict { .. }) => {
                // Lost the race against a concurrent attempt; reload and
                // re-apply once so this failure is still counted
                let reloaded = self.store.load(account.uuid).await?;
                if reloaded.state.is_locked() {
                    return Ok(reloaded.state);
                }
                self.apply_and_save(account, reloaded)
                    .await
                    .map_err(Self::conflict_to_internal)?
            }
            Err(e) => return Err(e),
        };

        warn!(
            account = %account.uuid,
            failed_attempts = state.failed_attempts,
            threshold = self.threshold,
            "failed login attempt recorded"
        );
        self.events.emit(
            AuthEvent::for_account(AuthEventType::FailedAttempt, account)
                .with_attempts(state.failed_attempts),
        );

        if just_locked {
            warn!(
                account = %account.uuid,
                "account locked after reaching the failed-attempt threshold"
            );
            self.events.emit(
                AuthEvent::for_account(AuthEventType::LockedOut, account)
                    .with_attempts(state.failed_attempts),
            );
        }

        Ok(state)
    }

    /// Reset the lockout state after a successful login. Idempotent.
    pub async fn record_success(&self, account: &Account) -> DomainResult<()> {
        self.reset_state(account).await?;
        Ok(())
    }

    /// Administrative unlock.
    ///
    /// Performs the same reset as `record_success`, but emits an `UNLOCKED`
    /// observation only when the account was actually locked beforehand;
    /// unlocking an already-unlocked account is invisible to consumers.
    pub async fn unlock(&self, account: &Account) -> DomainResult<()> {
        let was_locked = self.reset_state(account).await?;

        if was_locked {
            info!(account = %account.uuid, "account unlocked by administrator");
            self.events
                .emit(AuthEvent::for_account(AuthEventType::Unlocked, account));
        }

        Ok(())
    }

    /// Increment the counter, apply the lock transition when due, and persist
    async fn apply_and_save(
        &self,
        account: &Account,
        loaded: VersionedLockout,
    ) -> DomainResult<(LockoutState, bool)> {
        let mut state = loaded.state;
        let just_locked = state.apply_failure(self.threshold, Utc::now());
        self.store
            .save(account.uuid, &state, loaded.version)
            .await?;
        Ok((state, just_locked))
    }

    /// Write the zero state back; returns whether the account was locked
    async fn reset_state(&self, account: &Account) -> DomainResult<bool> {
        let loaded = self.store.load(account.uuid).await?;
        let was_locked = loaded.state.is_locked();
        let state = LockoutState::default();

        match self.store.save(account.uuid, &state, loaded.version).await {
            Ok(()) => Ok(was_locked),
            Err(DomainError::Conflict { .. }) => {
                let reloaded = self.store.load(account.uuid).await?;
                self.store
                    .save(account.uuid, &state, reloaded.version)
                    .await
                    .map_err(Self::conflict_to_internal)?;
                Ok(was_locked)
            }
            Err(e) => Err(e),
        }
    }

    /// A second conflict in a row is surfaced as a generic server error
    fn conflict_to_internal(e: DomainError) -> DomainError {
        match e {
            DomainError::Conflict { resource } => DomainError::Internal {
                message: format!("persistent version conflict updating {}", resource),
            },
            other => other,
        }
    }
}
