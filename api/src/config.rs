use aging_shared::config::{AppConfig, ConfigError, Environment};
use std::env;

/// Default preflight cache lifetime in seconds
const DEFAULT_CORS_MAX_AGE: usize = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let app = AppConfig::from_env()?;
        let cors = CorsConfig::from_env(app.environment);

        Ok(Config { app, cors })
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub environment: Environment,
    /// Only consulted in production; any origin is allowed otherwise
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

impl CorsConfig {
    /// Read `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`
    pub fn from_env(environment: Environment) -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();
        let max_age = env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_CORS_MAX_AGE);

        Self {
            environment,
            allowed_origins,
            max_age,
        }
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            allowed_origins: Vec::new(),
            max_age: DEFAULT_CORS_MAX_AGE,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
