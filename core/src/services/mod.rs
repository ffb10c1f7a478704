//! Business services containing domain logic and use cases.

pub mod auth;
pub mod deadline;
pub mod entity;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AccountService, AuthDecision, RequestAuthenticator, UnauthorizedReason};
pub use deadline::{within_deadline, DEFAULT_STORE_DEADLINE};
pub use entity::EntityService;
pub use password::{PasswordHasher, DEFAULT_COST, MAX_PASSWORD_BYTES};
pub use token::{TokenService, TokenServiceConfig};
