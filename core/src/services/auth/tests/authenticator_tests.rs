//! Unit tests for the request authenticator

use std::sync::Arc;

use crate::errors::ErrorKind;
use crate::services::auth::{AuthDecision, RequestAuthenticator, UnauthorizedReason};
use crate::services::token::{TokenService, TokenServiceConfig};

fn setup() -> (Arc<TokenService>, RequestAuthenticator) {
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("authenticator-secret")));
    let authenticator = RequestAuthenticator::new(Arc::clone(&tokens));
    (tokens, authenticator)
}

#[test]
fn test_missing_header() {
    let (_, authenticator) = setup();
    let decision = authenticator.authenticate(None);

    assert!(!decision.is_ok());
    assert_eq!(
        decision.failure_reason(),
        Some(UnauthorizedReason::NoCredentialHeader)
    );
    assert_eq!(
        UnauthorizedReason::NoCredentialHeader.to_string(),
        "no credential header present"
    );
}

#[test]
fn test_valid_bearer_token() {
    let (tokens, authenticator) = setup();
    let token = tokens.issue("subject-42").unwrap();
    let header = format!("Bearer {}", token);

    let decision = authenticator.authenticate(Some(&header));
    assert_eq!(
        decision,
        AuthDecision::Authorized {
            subject_id: "subject-42".to_string()
        }
    );
    assert_eq!(decision.subject_id(), Some("subject-42"));
}

#[test]
fn test_malformed_headers_do_not_fault() {
    let (tokens, authenticator) = setup();
    let token = tokens.issue("subject-42").unwrap();

    let malformed = [
        token.clone(),
        format!("Basic {}", token),
        format!("bearer {}", token),
        "Bearer".to_string(),
        "Bearer ".to_string(),
        format!("Bearer {} extra", token),
        String::new(),
    ];

    for header in malformed {
        let decision = authenticator.authenticate(Some(&header));
        assert_eq!(
            decision,
            AuthDecision::Unauthorized(UnauthorizedReason::MalformedHeader),
            "header {:?}",
            header
        );
    }
}

#[test]
fn test_invalid_token() {
    let (_, authenticator) = setup();
    let decision = authenticator.authenticate(Some("Bearer not.a.token"));

    assert_eq!(
        decision,
        AuthDecision::Unauthorized(UnauthorizedReason::InvalidToken)
    );
    let err = decision.into_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.to_string().contains("token not valid"));
}

#[test]
fn test_parse_bearer() {
    assert_eq!(RequestAuthenticator::parse_bearer("Bearer abc.def"), Some("abc.def"));
    assert_eq!(RequestAuthenticator::parse_bearer("Bearer   abc "), Some("abc"));
    assert_eq!(RequestAuthenticator::parse_bearer("Token abc"), None);
}
