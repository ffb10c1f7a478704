//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, ErrorKind, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Every error is surfaced to the request boundary unchanged; nothing in the
/// core retries or recovers locally.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a lookup miss on the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for an internal failure (store, hashing, signing)
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Classify the error into the externally visible taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::ValidationFailure,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized { .. } => ErrorKind::Unauthorized,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Internal { .. } => ErrorKind::InternalFailure,
            DomainError::Auth(err) => err.kind(),
            DomainError::Token(err) => err.kind(),
        }
    }
}
