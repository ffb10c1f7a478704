//! Stored password hash.

use serde::{Deserialize, Serialize};

/// Self-contained bcrypt hash string (algorithm id, cost, salt and digest).
///
/// This is the only persisted form of a password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedCredential(String);

impl HashedCredential {
    /// Wrap a hash string loaded from storage
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedCredential(..)")
    }
}
