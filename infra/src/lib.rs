//! # Infrastructure Layer
//!
//! Concrete storage for the aging API. The core crate only knows the
//! repository traits; this crate provides their MySQL implementations.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, schema bootstrap and a JSON document
//!   store built on SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
