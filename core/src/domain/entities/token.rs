//! Claims carried by a signed bearer token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub use aging_shared::config::auth::TOKEN_TTL_DAYS;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    #[serde(rename = "userID")]
    pub subject: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` issued at `now`, valid for `ttl`
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            subject: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Checks whether the claims are still within their lifetime
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
