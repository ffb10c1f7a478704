//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parsed_var, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from `SERVER_HOST` / `SERVER_PORT` (or `PORT`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = if std::env::var("SERVER_PORT").is_ok() {
            parsed_var("SERVER_PORT", defaults.port)?
        } else {
            parsed_var("PORT", defaults.port)?
        };
        let workers = parsed_var("SERVER_WORKERS", 0)?;

        Ok(Self { host, port, workers })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 6000);
        assert_eq!(config.bind_address(), "0.0.0.0:6000");
        assert_eq!(config.workers, 0);
    }
}
