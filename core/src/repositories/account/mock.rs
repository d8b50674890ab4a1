//! Mock implementation of AccountLookup for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use nb_shared::utils::validation::normalize_email;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountLookup;

/// In-memory account lookup for testing
pub struct MockAccountLookup {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl MockAccountLookup {
    /// Create an empty mock lookup
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock lookup seeded with accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    /// Add an account to the mock store
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.push(account);
    }
}

impl Default for MockAccountLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountLookup for MockAccountLookup {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Account>, DomainError> {
        let normalized = normalize_email(email);
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|a| !a.is_deleted && a.email_matches(&normalized))
            .cloned()
            .collect())
    }

    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Vec<Account>, DomainError> {
        let normalized = normalize_email(email);
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|a| !a.is_deleted && a.email_matches(&normalized) && a.phone_matches(phone))
            .cloned()
            .collect())
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.uuid == uuid && !a.is_deleted)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, email: &str, phone: Option<&str>) -> Account {
        Account::new(id, email, phone.map(str::to_string))
    }

    #[tokio::test]
    async fn test_find_by_email_excludes_deleted() {
        let mut deleted = account(1, "a@x.com", None);
        deleted.mark_deleted();
        let lookup =
            MockAccountLookup::with_accounts(vec![deleted, account(2, "a@x.com", None)]);

        let found = lookup.find_by_email("a@x.com").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[tokio::test]
    async fn test_find_by_email_and_phone_filters_both() {
        let lookup = MockAccountLookup::with_accounts(vec![
            account(1, "b@x.com", Some("111")),
            account(2, "b@x.com", Some("222")),
        ]);

        let found = lookup.find_by_email_and_phone("b@x.com", "222").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[tokio::test]
    async fn test_find_by_uuid() {
        let target = account(1, "a@x.com", None);
        let uuid = target.uuid;
        let lookup = MockAccountLookup::with_accounts(vec![target]);

        assert!(lookup.find_by_uuid(uuid).await.unwrap().is_some());
        assert!(lookup.find_by_uuid(Uuid::new_v4()).await.unwrap().is_none());
    }
}
