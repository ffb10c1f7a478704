//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{parsed_var, required_var, ConfigError};

/// Database configuration for the MySQL document store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Upper bound for a single store call made while serving a request
    #[serde(default = "default_request_deadline")]
    pub request_deadline_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/aging"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            request_deadline_secs: default_request_deadline(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables (`DB_URI` is required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required_var("DB_URI")?;
        let max_connections = parsed_var("DATABASE_MAX_CONNECTIONS", 10)?;
        let connect_timeout = parsed_var("DATABASE_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            url,
            max_connections,
            connect_timeout,
            ..Default::default()
        })
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Request deadline as a `Duration`
    pub fn request_deadline(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_deadline_secs)
    }
}

fn default_request_deadline() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::new("mysql://db:3306/aging").with_max_connections(5);
        assert_eq!(config.url, "mysql://db:3306/aging");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.request_deadline(), std::time::Duration::from_secs(10));
    }
}
