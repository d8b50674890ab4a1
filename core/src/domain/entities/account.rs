//! Account entity representing a login identity in the NoticeBoard system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nb_shared::utils::validation::normalize_email;

/// A user identity with login credentials.
///
/// Emails and phones are not unique at the database level; several accounts
/// may share either. The tuple (email, phone) is effectively unique in
/// practice, which is what the account matcher relies on. Email comparison
/// is always case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Internal numeric identifier (database primary key)
    pub id: i64,

    /// External-facing identifier
    pub uuid: Uuid,

    /// Email address, compared case-insensitively
    pub email: String,

    /// Phone number in normalized digit form, if one is on record
    pub phone: Option<String>,

    /// Hashed login credential; `None` until one is configured
    pub credential_hash: Option<String>,

    /// Whether the account has completed activation
    pub is_active: bool,

    /// Soft-delete flag; deleted accounts never match a login
    pub is_deleted: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account. Accounts start inactive until activation
    /// completes, with no credential configured.
    pub fn new(id: i64, email: impl Into<String>, phone: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            uuid: Uuid::new_v4(),
            email: email.into(),
            phone,
            credential_hash: None,
            is_active: false,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as activated
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Soft-deletes the account
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }

    /// Sets the login credential hash
    pub fn set_credential_hash(&mut self, hash: impl Into<String>) {
        self.credential_hash = Some(hash.into());
        self.updated_at = Utc::now();
    }

    /// Whether a login credential has been configured
    pub fn has_credential(&self) -> bool {
        self.credential_hash.is_some()
    }

    /// Case-insensitive email comparison against an already-normalized email
    pub fn email_matches(&self, normalized_email: &str) -> bool {
        normalize_email(&self.email) == normalized_email
    }

    /// Exact phone comparison; accounts without a phone never match
    pub fn phone_matches(&self, phone: &str) -> bool {
        self.phone.as_deref() == Some(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(1, "a@x.com", Some("5551234".to_string()));

        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.phone.as_deref(), Some("5551234"));
        assert!(!account.is_active);
        assert!(!account.is_deleted);
        assert!(!account.has_credential());
    }

    #[test]
    fn test_activation_lifecycle() {
        let mut account = Account::new(1, "a@x.com", None);

        account.activate();
        assert!(account.is_active);
        account.deactivate();
        assert!(!account.is_active);
    }

    #[test]
    fn test_email_matches_is_case_insensitive() {
        let account = Account::new(1, "Alice@X.Com", None);
        assert!(account.email_matches("alice@x.com"));
        assert!(!account.email_matches("bob@x.com"));
    }

    #[test]
    fn test_phone_matches() {
        let with_phone = Account::new(1, "a@x.com", Some("111".to_string()));
        let without_phone = Account::new(2, "a@x.com", None);

        assert!(with_phone.phone_matches("111"));
        assert!(!with_phone.phone_matches("222"));
        assert!(!without_phone.phone_matches("111"));
    }

    #[test]
    fn test_set_credential_hash() {
        let mut account = Account::new(1, "a@x.com", None);
        account.set_credential_hash("$2b$12$hash");
        assert!(account.has_credential());
    }
}
