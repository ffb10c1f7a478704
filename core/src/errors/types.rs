//! Error type definitions for credential handling and token management

use thiserror::Error;

/// Externally visible error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed request fields
    ValidationFailure,
    /// Lookup miss
    NotFound,
    /// Missing, invalid or expired token, or wrong password
    Unauthorized,
    /// Duplicate account on create
    Conflict,
    /// Hashing, signing or store failure
    InternalFailure,
}

/// Account and credential errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("User account already exists")]
    AccountAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::IncorrectPassword => ErrorKind::Unauthorized,
            AuthError::AccountAlreadyExists => ErrorKind::Conflict,
            AuthError::HashingFailed(_) => ErrorKind::InternalFailure,
        }
    }
}

/// Token errors
///
/// Decoding never distinguishes between bad signatures, wrong algorithms and
/// expiry: all of them are `InvalidToken`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token not valid")]
    InvalidToken,

    #[error("Token signing failed: {0}")]
    SigningFailure(String),

    #[error("Token signing key is not configured")]
    SigningKeyMissing,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::InvalidToken => ErrorKind::Unauthorized,
            TokenError::SigningFailure(_) | TokenError::SigningKeyMissing => {
                ErrorKind::InternalFailure
            }
        }
    }
}
