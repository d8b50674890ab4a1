//! Account matcher: resolves which account a login identifier set refers to.
//!
//! Emails are not unique, so resolution may need the phone number as a second
//! identifier. The matcher never discloses why a combination failed to match
//! beyond the `PhoneRequired` prompt; an ambiguous or non-matching
//! email/phone pair is reported as plain `NotFound` to prevent account
//! enumeration.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;
use crate::repositories::AccountLookup;

/// Resolution failures, distinct from infrastructure errors
#[derive(Error, Debug)]
pub enum MatchError {
    /// No account matches the supplied identifiers (or too many do and the
    /// detail is withheld)
    #[error("no matching account")]
    NotFound,

    /// The email alone matches several accounts; the caller must supply a
    /// phone number to disambiguate
    #[error("phone number required to disambiguate")]
    PhoneRequired,

    /// Lookup failure from the underlying store
    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Pure-read resolver over the account lookup capability
pub struct AccountMatcher<L>
where
    L: AccountLookup,
{
    lookup: Arc<L>,
}

impl<L> AccountMatcher<L>
where
    L: AccountLookup,
{
    /// Create a new account matcher
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Resolve a login identifier set to a single account.
    ///
    /// A unique email match wins outright; the supplied phone is ignored in
    /// that case (it is not needed to disambiguate). Only when the email is
    /// ambiguous does the phone become mandatory.
    pub async fn resolve(
        &self,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Account, MatchError> {
        let mut candidates = self.lookup.find_by_email(email).await?;

        match candidates.len() {
            0 => Err(MatchError::NotFound),
            1 => Ok(candidates.remove(0)),
            _ => {
                let phone = phone.ok_or(MatchError::PhoneRequired)?;
                let mut filtered = self.lookup.find_by_email_and_phone(email, phone).await?;

                // Exactly one match or nothing; 0 and >1 are deliberately
                // indistinguishable to the caller
                if filtered.len() == 1 {
                    Ok(filtered.remove(0))
                } else {
                    Err(MatchError::NotFound)
                }
            }
        }
    }
}
