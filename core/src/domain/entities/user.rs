//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::HashedCredential;

use super::document::Document;

/// User entity
///
/// The password is only ever held in its hashed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Login email, stored normalized
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: HashedCredential,
}

/// Mutable user fields accepted by update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub email: String,
}

impl User {
    /// Creates a new User with a freshly generated id
    pub fn new(email: impl Into<String>, password_hash: HashedCredential) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            email: email.into(),
            password_hash,
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";
    const NAME: &'static str = "user";
    type Fields = UserFields;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn overwrite(&mut self, fields: UserFields) {
        self.email = fields.email;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}
