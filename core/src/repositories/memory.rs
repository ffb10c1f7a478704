//! In-memory implementation of the entity store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Document, User};
use crate::errors::DomainError;

use super::entity::EntityRepository;
use super::user::UserRepository;

/// Collection held in process memory, keyed by record id
pub struct InMemoryStore<E: Document> {
    records: Arc<RwLock<HashMap<Uuid, E>>>,
}

impl<E: Document> InMemoryStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    // Caller holds the write lock, so the check and the write are atomic
    fn ensure_unique(records: &HashMap<Uuid, E>, candidate: &E) -> Result<(), DomainError> {
        let Some(key) = candidate.unique_key() else {
            return Ok(());
        };
        let taken = records
            .values()
            .any(|r| r.id() != candidate.id() && r.unique_key() == Some(key));

        if taken {
            return Err(DomainError::Conflict {
                message: format!("{} already exists", E::NAME),
            });
        }
        Ok(())
    }
}

impl<E: Document> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Document> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<E: Document> EntityRepository<E> for InMemoryStore<E> {
    async fn insert(&self, record: E) -> Result<Uuid, DomainError> {
        let mut records = self.records.write().await;
        let id = record.id();
        if records.contains_key(&id) {
            return Err(DomainError::internal(format!(
                "duplicate {} id {}",
                E::NAME,
                id
            )));
        }
        Self::ensure_unique(&records, &record)?;
        records.insert(id, record);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, fields: E::Fields) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let Some(current) = records.get(&id) else {
            return Ok(0);
        };

        let mut updated = current.clone();
        updated.overwrite(fields);
        Self::ensure_unique(&records, &updated)?;
        records.insert(id, updated);
        Ok(1)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).map_or(0, |_| 1))
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        let records = self.records.read().await;
        let mut all: Vec<E> = records.values().cloned().collect();
        all.sort_by_key(|r| r.created_at());
        Ok(all)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|u| u.email == email).cloned())
    }
}
