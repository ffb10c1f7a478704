//! Repository trait defining the document store contract for one collection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Document;
use crate::errors::DomainError;

/// Per-collection document store operations
///
/// Implementations are responsible for their own concurrency control; callers
/// hold no locks across calls.
#[async_trait]
pub trait EntityRepository<E: Document>: Send + Sync {
    /// Persist a new record and return its id
    async fn insert(&self, record: E) -> Result<Uuid, DomainError>;

    /// Find a record by id
    ///
    /// # Returns
    /// * `Ok(Some(E))` - Record found
    /// * `Ok(None)` - No record with that id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError>;

    /// Overwrite every mutable field of the record with `fields`
    ///
    /// Returns the number of matched records (0 or 1).
    async fn update(&self, id: Uuid, fields: E::Fields) -> Result<u64, DomainError>;

    /// Delete a record, returning the number of deleted records (0 or 1)
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;

    /// All records in the collection, oldest first
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;
}
