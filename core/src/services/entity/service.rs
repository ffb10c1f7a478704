//! Entity service implementation

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::entities::Document;
use crate::errors::DomainError;
use crate::repositories::EntityRepository;
use crate::services::deadline::within_deadline;

/// CRUD operations for one collection, each store call bounded by `deadline`
pub struct EntityService<E: Document> {
    store: Arc<dyn EntityRepository<E>>,
    deadline: Duration,
}

impl<E: Document> EntityService<E> {
    pub fn new(store: Arc<dyn EntityRepository<E>>, deadline: Duration) -> Self {
        Self { store, deadline }
    }

    /// Insert a new record, returning its id
    pub async fn create(&self, record: E) -> Result<Uuid, DomainError> {
        let id = within_deadline(self.deadline, self.store.insert(record)).await?;
        tracing::debug!(collection = E::COLLECTION, id = %id, "Inserted record");
        Ok(id)
    }

    /// Fetch a record by id
    pub async fn get(&self, id: Uuid) -> Result<E, DomainError> {
        within_deadline(self.deadline, self.store.find_by_id(id))
            .await?
            .ok_or_else(|| DomainError::not_found(E::NAME))
    }

    /// All records in the collection
    pub async fn list(&self) -> Result<Vec<E>, DomainError> {
        within_deadline(self.deadline, self.store.find_all()).await
    }

    /// Overwrite every mutable field, then re-read the stored record
    ///
    /// A zero match count is reported as `NotFound`. The re-read reflects
    /// the latest committed state, which may include a concurrent writer's
    /// change.
    pub async fn update(&self, id: Uuid, fields: E::Fields) -> Result<E, DomainError> {
        let matched = within_deadline(self.deadline, self.store.update(id, fields)).await?;
        if matched == 0 {
            return Err(DomainError::not_found(E::NAME));
        }

        tracing::debug!(collection = E::COLLECTION, id = %id, "Updated record");
        self.get(id).await
    }

    /// Delete a record by id
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = within_deadline(self.deadline, self.store.delete(id)).await?;
        if deleted == 0 {
            return Err(DomainError::not_found(E::NAME));
        }

        tracing::debug!(collection = E::COLLECTION, id = %id, "Deleted record");
        Ok(())
    }
}

impl<E: Document> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            deadline: self.deadline,
        }
    }
}
