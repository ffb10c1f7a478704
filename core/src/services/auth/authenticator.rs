//! Request authenticator turning an `Authorization` header into a decision

use std::sync::Arc;

use crate::errors::DomainError;
use crate::services::token::TokenService;

const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    NoCredentialHeader,
    MalformedHeader,
    InvalidToken,
}

impl UnauthorizedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnauthorizedReason::NoCredentialHeader => "no credential header present",
            UnauthorizedReason::MalformedHeader => "malformed authorization header",
            UnauthorizedReason::InvalidToken => "token not valid",
        }
    }
}

impl std::fmt::Display for UnauthorizedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of authenticating a request
///
/// The decision only reflects token validity. Whether the subject still
/// exists as a user is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Authorized { subject_id: String },
    Unauthorized(UnauthorizedReason),
}

impl AuthDecision {
    pub fn is_ok(&self) -> bool {
        matches!(self, AuthDecision::Authorized { .. })
    }

    pub fn subject_id(&self) -> Option<&str> {
        match self {
            AuthDecision::Authorized { subject_id } => Some(subject_id),
            AuthDecision::Unauthorized(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<UnauthorizedReason> {
        match self {
            AuthDecision::Authorized { .. } => None,
            AuthDecision::Unauthorized(reason) => Some(*reason),
        }
    }

    /// Convert into the subject id or an `Unauthorized` domain error
    pub fn into_result(self) -> Result<String, DomainError> {
        match self {
            AuthDecision::Authorized { subject_id } => Ok(subject_id),
            AuthDecision::Unauthorized(reason) => Err(DomainError::Unauthorized {
                reason: reason.to_string(),
            }),
        }
    }
}

/// Gate for bearer-protected routes
///
/// Never writes a response; callers short-circuit on `Unauthorized`.
pub struct RequestAuthenticator {
    token_service: Arc<TokenService>,
}

impl RequestAuthenticator {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Authenticate the raw `Authorization` header value, if any
    pub fn authenticate(&self, header: Option<&str>) -> AuthDecision {
        let Some(header) = header else {
            return AuthDecision::Unauthorized(UnauthorizedReason::NoCredentialHeader);
        };

        let Some(token) = Self::parse_bearer(header) else {
            return AuthDecision::Unauthorized(UnauthorizedReason::MalformedHeader);
        };

        match self.token_service.decode(token) {
            Ok(subject_id) => AuthDecision::Authorized { subject_id },
            Err(_) => AuthDecision::Unauthorized(UnauthorizedReason::InvalidToken),
        }
    }

    /// Extract the token from `Bearer <token>`
    ///
    /// Returns `None` when the scheme is missing or the token part is empty
    /// or contains whitespace.
    pub fn parse_bearer(header: &str) -> Option<&str> {
        let token = header.strip_prefix(BEARER_PREFIX)?.trim();
        if token.is_empty() || token.contains(char::is_whitespace) {
            return None;
        }
        Some(token)
    }
}
