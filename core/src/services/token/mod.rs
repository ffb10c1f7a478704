//! Token service module for bearer token management
//!
//! Issues signed, time-limited HS256 tokens binding a user id and verifies
//! presented tokens. Tokens are stateless: there is no revocation list and
//! expiry is the only lifecycle bound.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
