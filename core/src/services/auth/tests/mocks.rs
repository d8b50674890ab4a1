//! Mock implementations for testing the authentication core

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::event::{AuthEvent, AuthEventType};
use crate::domain::entities::lockout::{LockoutState, VersionedLockout};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{LockoutStore, MockLockoutStore};
use crate::services::auth::credential::CredentialVerifier;
use crate::services::events::EventSink;

/// Build an active account with the credential hash "secret"
/// (to pair with `PlainVerifier`)
pub fn test_account(id: i64, email: &str, phone: Option<&str>) -> Account {
    let mut account = Account::new(id, email, phone.map(str::to_string));
    account.activate();
    account.set_credential_hash("secret");
    account
}

/// Event sink that records every emitted event
pub struct RecordingEventSink {
    events: Mutex<Vec<AuthEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<AuthEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event_type: AuthEventType) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }

    pub fn total(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: AuthEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Verifier that treats the stored hash as the plaintext itself
pub struct PlainVerifier;

impl CredentialVerifier for PlainVerifier {
    fn verify(&self, credential_hash: &str, plaintext: &str) -> DomainResult<bool> {
        Ok(credential_hash == plaintext)
    }
}

/// Verifier that must never be reached; panics when invoked
pub struct PanickingVerifier;

impl CredentialVerifier for PanickingVerifier {
    fn verify(&self, _credential_hash: &str, _plaintext: &str) -> DomainResult<bool> {
        panic!("credential verifier invoked for an account that must not reach it");
    }
}

/// Lockout store that rejects the first N saves with a version conflict,
/// then behaves like the in-memory mock. Counts save attempts.
pub struct ConflictingLockoutStore {
    inner: MockLockoutStore,
    conflicts_remaining: AtomicU32,
    save_attempts: AtomicU32,
}

impl ConflictingLockoutStore {
    pub fn new(conflicts: u32) -> Self {
        Self {
            inner: MockLockoutStore::new(),
            conflicts_remaining: AtomicU32::new(conflicts),
            save_attempts: AtomicU32::new(0),
        }
    }

    pub fn save_attempts(&self) -> u32 {
        self.save_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LockoutStore for ConflictingLockoutStore {
    async fn load(&self, account_uuid: Uuid) -> Result<VersionedLockout, DomainError> {
        self.inner.load(account_uuid).await
    }

    async fn save(
        &self,
        account_uuid: Uuid,
        state: &LockoutState,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);

        let remaining = self.conflicts_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.conflicts_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(DomainError::Conflict {
                resource: "LockoutState".to_string(),
            });
        }

        self.inner.save(account_uuid, state, expected_version).await
    }
}
