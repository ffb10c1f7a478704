//! Unit tests for token claims

use chrono::{Duration, Utc};

use aging_shared::config::AuthConfig;

use crate::domain::entities::token::{Claims, TOKEN_TTL_DAYS};
use crate::services::token::TokenServiceConfig;

#[test]
fn test_claims_expiry_window() {
    let now = Utc::now();
    let claims = Claims::new("user-1", now, Duration::days(TOKEN_TTL_DAYS));

    assert_eq!(claims.subject, "user-1");
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    assert!(!claims.is_expired_at(now));
    assert!(claims.is_expired_at(now + Duration::days(8)));
}

#[test]
fn test_claims_subject_wire_name() {
    let claims = Claims::new("abc", Utc::now(), Duration::hours(1));
    let value = serde_json::to_value(&claims).unwrap();
    assert_eq!(value["userID"], "abc");
    assert!(value.get("exp").is_some());
}

#[test]
fn test_token_lifetime_has_one_source() {
    let from_config = TokenServiceConfig::from(&AuthConfig::new("secret"));
    assert_eq!(from_config.ttl, TokenServiceConfig::new("secret").ttl);
    assert_eq!(from_config.ttl, Duration::days(TOKEN_TTL_DAYS));
}
