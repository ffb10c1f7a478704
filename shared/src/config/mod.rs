//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token signing configuration
//! - `database` - database connection, pool and request deadline configuration
//! - `environment` - environment detection
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while reading configuration at process start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `SESSION_SECRET` and `DB_URI` are mandatory; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}

/// Read a variable that must be present and non-blank
pub(crate) fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name.to_string())),
    }
}

/// Read an optional variable and parse it, falling back to `default` when unset
pub(crate) fn parsed_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            var: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
