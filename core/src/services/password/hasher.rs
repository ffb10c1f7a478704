//! bcrypt-backed password hasher

use crate::domain::value_objects::HashedCredential;
use crate::errors::{AuthError, DomainError};

/// bcrypt work factor used for stored credentials
pub const DEFAULT_COST: u32 = 14;

/// bcrypt only reads this many bytes of input; longer passwords are refused
/// so two passwords sharing a prefix never collide
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted, adaptive password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher with the production work factor
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with an explicit work factor (bcrypt accepts 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    ///
    /// # Returns
    ///
    /// * `Ok(HashedCredential)` - `$2b$<cost>$<salt><digest>`
    /// * `Err(DomainError)` - empty or over-long password, or bcrypt rejected
    ///   the input/cost
    pub fn hash(&self, password: &str) -> Result<HashedCredential, DomainError> {
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(DomainError::validation(format!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        bcrypt::hash(password, self.cost)
            .map(HashedCredential::from_stored)
            .map_err(|e| AuthError::HashingFailed(e.to_string()).into())
    }

    /// Check a password against a stored hash
    ///
    /// Malformed hashes verify as `false` rather than erroring, so callers see
    /// a plain mismatch. The digest comparison inside bcrypt is constant-time.
    /// Over-long passwords never match, since `hash` refuses to store them.
    pub fn verify(&self, password: &str, hash: &HashedCredential) -> bool {
        if password.len() > MAX_PASSWORD_BYTES {
            return false;
        }
        bcrypt::verify(password, hash.as_str()).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
