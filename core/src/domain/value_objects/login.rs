//! Login request and session value objects.
//!
//! `LoginRequest` is the explicit validation step in front of the login
//! orchestrator: it can only be constructed from well-formed, normalized
//! identifiers, so the services downstream never re-validate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nb_shared::utils::validation::{
    is_valid_email, is_valid_phone, normalize_email, normalize_phone,
};

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult};

/// A validated login attempt. Ephemeral, never persisted.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    phone: Option<String>,
    credential: String,
}

impl LoginRequest {
    /// Validate and normalize raw login input.
    ///
    /// Email is required and must be well-formed; phone is optional but must
    /// be plausible when present; the credential must be non-empty.
    pub fn new(
        email: &str,
        phone: Option<&str>,
        credential: &str,
    ) -> DomainResult<Self> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "email is required".to_string(),
            });
        }
        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "email is not well-formed".to_string(),
            });
        }

        let phone = match phone {
            Some(raw) => {
                let normalized = normalize_phone(raw);
                if !is_valid_phone(&normalized) {
                    return Err(DomainError::Validation {
                        message: "phone number is not well-formed".to_string(),
                    });
                }
                Some(normalized)
            }
            None => None,
        };

        if credential.is_empty() {
            return Err(DomainError::Validation {
                message: "credential is required".to_string(),
            });
        }

        Ok(Self {
            email,
            phone,
            credential: credential.to_string(),
        })
    }

    /// Normalized email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Normalized phone, when supplied
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Plaintext credential to verify
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

/// The artifact issued on successful login.
///
/// Token minting (JWT signing etc.) belongs to an external collaborator;
/// the token carried here is an opaque value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// External UUID of the logged-in account
    pub account_uuid: Uuid,

    /// Opaque session token
    pub token: String,

    /// Issuance timestamp
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Issue a session for an account
    pub fn issue(account: &Account) -> Self {
        Self {
            account_uuid: account.uuid,
            token: Uuid::new_v4().simple().to_string(),
            issued_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_is_normalized() {
        let request = LoginRequest::new("  A@X.Com ", Some("555-1234"), "secret").unwrap();
        assert_eq!(request.email(), "a@x.com");
        assert_eq!(request.phone(), Some("5551234"));
        assert_eq!(request.credential(), "secret");
    }

    #[test]
    fn test_phone_is_optional() {
        let request = LoginRequest::new("a@x.com", None, "secret").unwrap();
        assert!(request.phone().is_none());
    }

    #[test]
    fn test_rejects_empty_email() {
        let result = LoginRequest::new("   ", None, "secret");
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_rejects_malformed_email() {
        let result = LoginRequest::new("not-an-email", None, "secret");
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_rejects_malformed_phone() {
        let result = LoginRequest::new("a@x.com", Some("xx"), "secret");
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_rejects_empty_credential() {
        let result = LoginRequest::new("a@x.com", None, "");
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_session_carries_account_uuid() {
        let account = Account::new(1, "a@x.com", None);
        let session = Session::issue(&account);
        assert_eq!(session.account_uuid, account.uuid);
        assert!(!session.token.is_empty());
    }
}
