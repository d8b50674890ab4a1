//! Service layer: the authentication core services and the event sink
//! capability they publish through.

pub mod auth;
pub mod events;

pub use auth::{
    AccountMatcher, AuthService, AuthServiceConfig, BcryptVerifier, CredentialVerifier,
    LockoutTracker, MatchError,
};
pub use events::{EventSink, NoOpEventSink, TracingEventSink};
