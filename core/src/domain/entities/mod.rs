pub mod account;
pub mod event;
pub mod lockout;

pub use account::Account;
pub use event::{AuthEvent, AuthEventType};
pub use lockout::{LockoutState, VersionedLockout};
