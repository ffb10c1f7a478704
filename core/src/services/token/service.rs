//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Service for issuing and verifying bearer tokens
///
/// The service is immutable after construction and safe to share between
/// request tasks.
pub struct TokenService {
    /// `None` when no secret was configured; every operation then fails
    keys: Option<SigningKeys>,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service
    ///
    /// An empty secret does not fall back to signing with an empty key:
    /// `issue` then fails with `SigningKeyMissing` and `decode` with
    /// `InvalidToken`.
    pub fn new(config: TokenServiceConfig) -> Self {
        let keys = if config.secret.is_empty() {
            None
        } else {
            Some(SigningKeys {
                encoding: EncodingKey::from_secret(config.secret.as_bytes()),
                decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            })
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys,
            ttl: config.ttl,
            validation,
        }
    }

    /// Whether a signing key is configured
    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `subject_id`, expiring `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - compact JWS representation
    /// * `Err(DomainError::Token)` - no key configured or signing failed
    pub fn issue(&self, subject_id: &str) -> Result<String, DomainError> {
        self.issue_at(subject_id, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        subject_id: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let keys = self.keys.as_ref().ok_or(TokenError::SigningKeyMissing)?;
        let claims = Claims::new(subject_id, now, self.ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| TokenError::SigningFailure(e.to_string()).into())
    }

    /// Verifies a token and returns the subject id it was issued for
    ///
    /// Fails with `InvalidToken` if the signature does not verify, the
    /// algorithm is not HS256, the token has expired, or the subject is
    /// missing or empty.
    pub fn decode(&self, token: &str) -> Result<String, DomainError> {
        let keys = self.keys.as_ref().ok_or(TokenError::InvalidToken)?;

        let token_data = decode::<Claims>(token, &keys.decoding, &self.validation)
            .map_err(|_| TokenError::InvalidToken)?;
        let claims = token_data.claims;

        // jsonwebtoken accepts exp == now; a token is only valid strictly before expiry
        if claims.is_expired_at(Utc::now()) || claims.subject.is_empty() {
            return Err(TokenError::InvalidToken.into());
        }

        Ok(claims.subject)
    }
}
