//! User repository: the users collection plus lookup by email.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainError;

use super::entity::EntityRepository;

#[async_trait]
pub trait UserRepository: EntityRepository<User> {
    /// Find a user by their (normalized) email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}
