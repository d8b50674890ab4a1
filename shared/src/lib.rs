//! Shared utilities and common types for the NoticeBoard backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Validation and normalization utilities (email, phone)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, LockoutConfig};
pub use utils::validation;
