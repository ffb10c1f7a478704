//! Shared utilities and common types for the aging API server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - Utility functions (email and field validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, ServerConfig,
};
pub use utils::validation;
