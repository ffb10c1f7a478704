//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::{required_var, ConfigError};

/// Bearer tokens live for a fixed seven days; there is no refresh flow
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Symmetric key used to sign and verify bearer tokens
    pub session_secret: String,

    /// Token lifetime in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

impl AuthConfig {
    /// Create a configuration with the given signing secret
    pub fn new(session_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            token_ttl_days: TOKEN_TTL_DAYS,
        }
    }

    /// Create from environment variables (`SESSION_SECRET` is required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(required_var("SESSION_SECRET")?))
    }
}

// Keep the secret out of debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_secret", &"<redacted>")
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

fn default_token_ttl_days() -> i64 {
    TOKEN_TTL_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_new_uses_fixed_ttl() {
        let config = AuthConfig::new("my-secret");
        assert_eq!(config.session_secret, "my-secret");
        assert_eq!(config.token_ttl_days, 7);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("super-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
