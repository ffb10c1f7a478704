//! MySQL connection pool

use std::time::Duration;

use aging_shared::config::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::InfrastructureError;

/// Shared MySQL connection pool
///
/// Cloning is cheap; all clones share the same underlying connections.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    max_connections: u32,
}

impl DatabasePool {
    /// Connect using the given configuration
    ///
    /// Fails if the URL cannot be parsed or no connection can be
    /// established within `connect_timeout`.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        if config.url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "database url must not be empty".to_string(),
            ));
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connection pool established"
        );

        Ok(Self {
            pool,
            max_connections: config.max_connections,
        })
    }

    /// Underlying sqlx pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip `SELECT 1` to the server
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(value == 1)
    }

    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle() as u32,
            max_connections: self.max_connections,
        }
    }

    /// Close all connections; used on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} connections, {} idle",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
