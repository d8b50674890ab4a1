//! Mock implementation of LockoutStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::lockout::{LockoutState, VersionedLockout};
use crate::errors::DomainError;

use super::trait_::LockoutStore;

/// In-memory lockout store with version bookkeeping
pub struct MockLockoutStore {
    entries: Arc<RwLock<HashMap<Uuid, VersionedLockout>>>,
}

impl MockLockoutStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store with an existing state (version 1), bypassing the
    /// version check. Test setup only.
    pub async fn seed(&self, account_uuid: Uuid, state: LockoutState) {
        self.entries
            .write()
            .await
            .insert(account_uuid, VersionedLockout { state, version: 1 });
    }
}

impl Default for MockLockoutStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LockoutStore for MockLockoutStore {
    async fn load(&self, account_uuid: Uuid) -> Result<VersionedLockout, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&account_uuid).cloned().unwrap_or_default())
    }

    async fn save(
        &self,
        account_uuid: Uuid,
        state: &LockoutState,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let current_version = entries.get(&account_uuid).map_or(0, |e| e.version);

        if current_version != expected_version {
            return Err(DomainError::Conflict {
                resource: "LockoutState".to_string(),
            });
        }

        entries.insert(
            account_uuid,
            VersionedLockout {
                state: state.clone(),
                version: current_version + 1,
            },
        );
        Ok(())
    }
}
