use aging_core::domain::entities::User;
use aging_core::services::MAX_PASSWORD_BYTES;
use aging_shared::utils::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Same rule the account service applies, so both layers agree on every input
fn valid_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

// bcrypt reads at most 72 bytes; the hasher enforces the byte limit itself
fn password_within_limit(password: &str) -> Result<(), ValidationError> {
    if password.len() <= MAX_PASSWORD_BYTES {
        Ok(())
    } else {
        Err(ValidationError::new("length"))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "valid_email", message = "email is not a valid address"))]
    pub email: String,

    #[validate(
        length(min = 1, message = "password is required"),
        custom(function = "password_within_limit", message = "password must be at most 72 bytes")
    )]
    pub password: String,
}

/// Only the email is mutable; passwords are never changed through update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "valid_email", message = "email is not a valid address"))]
    pub email: String,
}

/// Public projection of a user; the password hash never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            email: user.email,
        }
    }
}
