//! The record contract shared by every stored entity.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A flat record owned by the entity store.
///
/// Records carry a generated identity and a creation timestamp. Everything
/// else lives in `Fields`, which is what create and update accept; an update
/// overwrites every field and leaves `id` and `created_at` untouched.
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) name in the store
    const COLLECTION: &'static str;

    /// Human readable entity name used in messages ("spirit", "batch", ...)
    const NAME: &'static str;

    /// The mutable portion of the record
    type Fields: Clone + Send + Sync + 'static;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// Replace every mutable field with `fields`
    fn overwrite(&mut self, fields: Self::Fields);

    /// Secondary key that must be unique within the collection, if any
    fn unique_key(&self) -> Option<&str> {
        None
    }
}
