//! Login orchestration service.
//!
//! Composes the account matcher, the credential verifier and the lockout
//! tracker into the login decision, emitting exactly one outcome event per
//! attempt. Check ordering is normative: active before locked before
//! credential, so a caller probing a deactivated-but-locked account only ever
//! sees the inactive signal, and a locked account never reaches credential
//! verification.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::event::{AuthEvent, AuthEventType};
use crate::domain::value_objects::login::{LoginRequest, Session};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountLookup, LockoutStore};
use crate::services::events::EventSink;

use super::config::AuthServiceConfig;
use super::credential::CredentialVerifier;
use super::lockout::LockoutTracker;
use super::matcher::{AccountMatcher, MatchError};

/// Authentication service for the complete login flow
pub struct AuthService<L, S, V, E>
where
    L: AccountLookup,
    S: LockoutStore,
    V: CredentialVerifier,
    E: EventSink,
{
    /// Account lookup, also used directly for administrative operations
    accounts: Arc<L>,
    /// Resolver for non-unique login identifiers
    matcher: AccountMatcher<L>,
    /// Failed-attempt tracking and lock transitions
    lockout: LockoutTracker<S, E>,
    /// Credential verification
    verifier: Arc<V>,
    /// Outcome event emission
    events: Arc<E>,
}

impl<L, S, V, E> AuthService<L, S, V, E>
where
    L: AccountLookup,
    S: LockoutStore,
    V: CredentialVerifier,
    E: EventSink,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Lookup capability over account records
    /// * `lockout_store` - Persistence for per-account lockout state
    /// * `verifier` - Credential verification capability
    /// * `events` - Sink for audit/observability events
    /// * `config` - Service configuration (lockout threshold)
    pub fn new(
        accounts: Arc<L>,
        lockout_store: Arc<S>,
        verifier: Arc<V>,
        events: Arc<E>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            matcher: AccountMatcher::new(accounts.clone()),
            lockout: LockoutTracker::new(
                lockout_store,
                events.clone(),
                config.lockout_threshold(),
            ),
            accounts,
            verifier,
            events,
        }
    }

    /// The lockout tracker, for administrative status queries
    pub fn lockout(&self) -> &LockoutTracker<S, E> {
        &self.lockout
    }

    /// Attempt a login with an already-validated request.
    ///
    /// Returns a session on success; on failure, one of the typed
    /// authentication errors. Unknown accounts and wrong credentials are
    /// indistinguishable to the caller.
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<Session> {
        // Step 1: resolve which account this attempt refers to
        let account = match self.matcher.resolve(request.email(), request.phone()).await {
            Ok(account) => account,
            Err(MatchError::NotFound) => {
                // Indistinguishable from a wrong credential by design
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(MatchError::PhoneRequired) => {
                return Err(AuthError::PhoneRequired.into());
            }
            Err(MatchError::Store(e)) => return Err(e),
        };

        // Step 2: active check first, so a deactivated account never leaks
        // its lock state
        if !account.is_active {
            warn!(account = %account.uuid, "login attempt on inactive account");
            self.events.emit(AuthEvent::for_account(
                AuthEventType::InactiveLoginAttempt,
                &account,
            ));
            return Err(AuthError::AccountInactive.into());
        }

        // Step 3: locked accounts never reach credential verification
        if self.lockout.is_locked(&account).await? {
            warn!(account = %account.uuid, "login attempt on locked account");
            self.events.emit(AuthEvent::for_account(
                AuthEventType::LockedAccountLoginAttempt,
                &account,
            ));
            return Err(AuthError::AccountLockedOut.into());
        }

        // Step 4: credential check. An account that was never configured
        // with a credential does not count as an attempt.
        let credential_hash = match account.credential_hash.as_deref() {
            Some(hash) => hash,
            None => {
                warn!(account = %account.uuid, "login attempt on account with no credential set");
                return Err(AuthError::CredentialNotSet.into());
            }
        };

        if !self.verifier.verify(credential_hash, request.credential())? {
            self.lockout.record_failure(&account).await?;
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 5: success resets the counter and issues the session
        self.lockout.record_success(&account).await?;

        info!(account = %account.uuid, "login succeeded");
        self.events
            .emit(AuthEvent::for_account(AuthEventType::LoggedIn, &account));

        Ok(Session::issue(&account))
    }

    /// Administrative unlock of an account by its external UUID
    pub async fn unlock_account(&self, account_uuid: Uuid) -> DomainResult<()> {
        let account = self.find_account(account_uuid).await?;
        self.lockout.unlock(&account).await
    }

    async fn find_account(&self, account_uuid: Uuid) -> DomainResult<Account> {
        self.accounts
            .find_by_uuid(account_uuid)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })
    }
}
