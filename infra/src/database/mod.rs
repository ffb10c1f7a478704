//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Schema bootstrap for the document tables
//! - A generic document store implementing the core repository traits

pub mod connection;
pub mod mysql;
pub mod schema;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlDocumentStore;
pub use schema::ensure_schema;
