//! MySQL implementation of the entity store.
//!
//! Each collection is a table of `(id, created_at, document)` rows where
//! `document` holds the whole record as JSON. Updates read the stored
//! document under a row lock, overwrite its mutable fields and write it back
//! in the same transaction.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use aging_core::domain::entities::{Document, User};
use aging_core::errors::DomainError;
use aging_core::repositories::{EntityRepository, UserRepository};

/// MySQL-backed store for one document collection
pub struct MySqlDocumentStore<E: Document> {
    /// Database connection pool
    pool: MySqlPool,
    _collection: PhantomData<fn() -> E>,
}

impl<E: Document> MySqlDocumentStore<E> {
    /// Create a store over `E::COLLECTION`
    ///
    /// The table must exist; see [`ensure_schema`](crate::database::ensure_schema).
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _collection: PhantomData,
        }
    }

    fn row_to_document(row: &MySqlRow) -> Result<E, DomainError> {
        let document: Json<E> = row.try_get("document").map_err(|e| {
            DomainError::internal(format!("Failed to decode {} document: {}", E::NAME, e))
        })?;
        Ok(document.0)
    }

    /// Map a sqlx error, turning unique-key violations into `Conflict`
    fn store_error(action: &str, error: sqlx::Error) -> DomainError {
        let duplicate = error
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);

        if duplicate {
            return DomainError::Conflict {
                message: format!("{} already exists", E::NAME),
            };
        }

        tracing::error!(
            collection = E::COLLECTION,
            error = %error,
            "Failed to {} {}",
            action,
            E::NAME
        );
        DomainError::internal(format!("Failed to {} {}: {}", action, E::NAME, error))
    }
}

impl<E: Document> Clone for MySqlDocumentStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

#[async_trait]
impl<E: Document> EntityRepository<E> for MySqlDocumentStore<E> {
    async fn insert(&self, record: E) -> Result<Uuid, DomainError> {
        let query = format!(
            "INSERT INTO {} (id, created_at, document) VALUES (?, ?, ?)",
            E::COLLECTION
        );

        let id = record.id();
        sqlx::query(&query)
            .bind(id.to_string())
            .bind(record.created_at())
            .bind(Json(&record))
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("insert", e))?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError> {
        let query = format!(
            "SELECT document FROM {} WHERE id = ? LIMIT 1",
            E::COLLECTION
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("find", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_document(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: Uuid, fields: E::Fields) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::store_error("update", e))?;

        let select = format!(
            "SELECT document FROM {} WHERE id = ? FOR UPDATE",
            E::COLLECTION
        );
        let row = sqlx::query(&select)
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| Self::store_error("update", e))?;

        let Some(row) = row else {
            tx.rollback()
                .await
                .map_err(|e| Self::store_error("update", e))?;
            return Ok(0);
        };

        let mut record = Self::row_to_document(&row)?;
        record.overwrite(fields);

        let update = format!("UPDATE {} SET document = ? WHERE id = ?", E::COLLECTION);
        sqlx::query(&update)
            .bind(Json(&record))
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::store_error("update", e))?;

        tx.commit()
            .await
            .map_err(|e| Self::store_error("update", e))?;

        Ok(1)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM {} WHERE id = ?", E::COLLECTION);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("delete", e))?;

        Ok(result.rows_affected())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        let query = format!(
            "SELECT document FROM {} ORDER BY created_at ASC",
            E::COLLECTION
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::store_error("list", e))?;

        rows.iter().map(Self::row_to_document).collect()
    }
}

#[async_trait]
impl UserRepository for MySqlDocumentStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT document FROM {} WHERE email = ? LIMIT 1",
            User::COLLECTION
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("find", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_document(&row)?)),
            None => Ok(None),
        }
    }
}
