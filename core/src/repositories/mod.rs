pub mod account;
pub mod lockout;

pub use account::{AccountLookup, MockAccountLookup};
pub use lockout::{LockoutStore, MockLockoutStore};
