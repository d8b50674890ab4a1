//! Configuration for the authentication service

use nb_shared::config::LockoutConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Account lockout configuration
    pub lockout: LockoutConfig,
}

impl AuthServiceConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            lockout: LockoutConfig::from_env(),
        }
    }

    /// Failed-login threshold that triggers the lock
    pub fn lockout_threshold(&self) -> u32 {
        self.lockout.failed_login_attempts
    }
}
