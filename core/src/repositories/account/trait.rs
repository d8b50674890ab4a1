//! Account lookup trait defining the read interface for account resolution.
//!
//! This is the abstraction boundary towards the user-management module that
//! owns account storage. The core only reads through it; account creation,
//! activation and deletion happen elsewhere.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Read-only lookup capability over account records.
///
/// Email is not unique, so email lookups return every matching record;
/// disambiguation is the account matcher's job. Implementations must exclude
/// soft-deleted accounts from all results and compare emails
/// case-insensitively.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Find all non-deleted accounts whose email matches case-insensitively
    ///
    /// # Arguments
    /// * `email` - Normalized (trimmed, lowercased) email address
    ///
    /// # Returns
    /// * `Ok(accounts)` - All matches, possibly empty
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Vec<Account>, DomainError>;

    /// Find all non-deleted accounts matching both email and phone
    ///
    /// # Arguments
    /// * `email` - Normalized email address
    /// * `phone` - Normalized phone number (digits only)
    ///
    /// # Returns
    /// * `Ok(accounts)` - All matches; more than one indicates the
    ///   (email, phone) tuple is not unique after all
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Vec<Account>, DomainError>;

    /// Find a non-deleted account by its external UUID
    ///
    /// # Arguments
    /// * `uuid` - The external-facing account identifier
    ///
    /// # Returns
    /// * `Ok(Some(account))` - Account found
    /// * `Ok(None)` - No such account, or it has been deleted
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Account>, DomainError>;
}
