//! Configuration for the token service

use aging_shared::config::AuthConfig;
use chrono::Duration;

use crate::domain::entities::token::TOKEN_TTL_DAYS;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret; never embedded in a token
    pub secret: String,
    /// Token lifetime from issuance
    pub ttl: Duration,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::days(TOKEN_TTL_DAYS),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            secret: config.session_secret.clone(),
            ttl: Duration::days(config.token_ttl_days),
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
