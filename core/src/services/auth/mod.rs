//! Authentication module
//!
//! This module provides:
//! - Bearer header parsing and token checking for protected routes
//! - Account registration with hashed credentials
//! - Password login issuing a bearer token

mod authenticator;
mod service;

#[cfg(test)]
mod tests;

pub use authenticator::{AuthDecision, RequestAuthenticator, UnauthorizedReason};
pub use service::AccountService;
