//! Authentication events emitted for audit and observability.
//!
//! Events are a side channel: consumers (notification, audit storage) observe
//! them, but emission never influences the login decision itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nb_shared::utils::validation::mask_email;

use super::account::Account;

/// Event types for the authentication core
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEventType {
    /// A failed login attempt was counted
    FailedAttempt,
    /// The failed-attempt threshold was reached on this attempt (edge signal,
    /// distinct from `FailedAttempt` even though both come from one call)
    LockedOut,
    /// A locked account was reset by an administrator
    Unlocked,
    /// A login succeeded
    LoggedIn,
    /// A login was attempted against an account that has not been activated
    InactiveLoginAttempt,
    /// A login was attempted against a locked account
    LockedAccountLoginAttempt,
}

impl AuthEventType {
    /// String representation used on the wire and in event storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FailedAttempt => "FAILED_ATTEMPT",
            Self::LockedOut => "LOCKED_OUT",
            Self::Unlocked => "UNLOCKED",
            Self::LoggedIn => "LOGGED_IN",
            Self::InactiveLoginAttempt => "INACTIVE_LOGIN_ATTEMPT",
            Self::LockedAccountLoginAttempt => "LOCKED_ACCOUNT_LOGIN_ATTEMPT",
        }
    }

    /// Parse from the wire representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FAILED_ATTEMPT" => Some(Self::FailedAttempt),
            "LOCKED_OUT" => Some(Self::LockedOut),
            "UNLOCKED" => Some(Self::Unlocked),
            "LOGGED_IN" => Some(Self::LoggedIn),
            "INACTIVE_LOGIN_ATTEMPT" => Some(Self::InactiveLoginAttempt),
            "LOCKED_ACCOUNT_LOGIN_ATTEMPT" => Some(Self::LockedAccountLoginAttempt),
            _ => None,
        }
    }
}

/// An authentication event with its payload.
///
/// Identifiers are masked before they enter the event stream; the raw email
/// never leaves the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthEvent {
    /// Unique identifier for this event
    pub id: Uuid,

    /// What happened
    pub event_type: AuthEventType,

    /// External UUID of the affected account, when one was resolved
    pub account_uuid: Option<Uuid>,

    /// Masked email of the affected account (e.g. `a****@x.com`)
    pub email_masked: Option<String>,

    /// Failed-attempt count after the event, for attempt-related events
    pub failed_attempts: Option<u32>,

    /// When the event occurred
    pub occurred_at: DateTime<Utc>,
}

impl AuthEvent {
    /// Create an event without an account (e.g. for unresolved attempts)
    pub fn new(event_type: AuthEventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            account_uuid: None,
            email_masked: None,
            failed_attempts: None,
            occurred_at: Utc::now(),
        }
    }

    /// Create an event tied to a resolved account
    pub fn for_account(event_type: AuthEventType, account: &Account) -> Self {
        let mut event = Self::new(event_type);
        event.account_uuid = Some(account.uuid);
        event.email_masked = Some(mask_email(&account.email));
        event
    }

    /// Attach the failed-attempt count
    pub fn with_attempts(mut self, failed_attempts: u32) -> Self {
        self.failed_attempts = Some(failed_attempts);
        self
    }
}
