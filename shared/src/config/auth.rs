//! Authentication and account lockout configuration

use serde::{Deserialize, Serialize};

/// Account lockout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LockoutConfig {
    /// Number of consecutive failed login attempts before an account is locked
    #[serde(default = "default_failed_login_attempts")]
    pub failed_login_attempts: u32,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            failed_login_attempts: default_failed_login_attempts(),
        }
    }
}

impl LockoutConfig {
    /// Create a lockout configuration with an explicit threshold
    pub fn new(failed_login_attempts: u32) -> Self {
        Self {
            failed_login_attempts,
        }
    }

    /// Create from environment variables
    ///
    /// Reads `FAILED_LOGIN_ATTEMPTS`; falls back to the default threshold
    /// when the variable is missing or unparseable.
    pub fn from_env() -> Self {
        let failed_login_attempts = std::env::var("FAILED_LOGIN_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_failed_login_attempts);

        Self {
            failed_login_attempts,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Account lockout configuration
    #[serde(default)]
    pub lockout: LockoutConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            lockout: LockoutConfig::from_env(),
        }
    }

    /// Get the failed-login threshold (backward compatibility)
    pub fn failed_login_attempts(&self) -> u32 {
        self.lockout.failed_login_attempts
    }
}

fn default_failed_login_attempts() -> u32 {
    5
}
