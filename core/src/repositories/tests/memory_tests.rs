//! Unit tests for the in-memory store

use uuid::Uuid;

use crate::domain::entities::{Measurement, MeasurementFields, User, UserFields};
use crate::domain::value_objects::HashedCredential;
use crate::errors::ErrorKind;
use crate::repositories::{EntityRepository, InMemoryStore, UserRepository};

fn measurement(abv: f32) -> Measurement {
    Measurement::new(MeasurementFields {
        abv,
        image: "sample.jpg".to_string(),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_insert_and_find() {
    let store = InMemoryStore::new();
    let record = measurement(62.0);

    let id = store.insert(record.clone()).await.unwrap();
    assert_eq!(id, record.id);

    let found = store.find_by_id(id).await.unwrap();
    assert_eq!(found, Some(record));
    assert_eq!(store.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_reports_matched_count() {
    let store = InMemoryStore::new();
    let id = store.insert(measurement(62.0)).await.unwrap();

    let fields = MeasurementFields {
        abv: 58.4,
        image: "second.jpg".to_string(),
        notes: Some("toffee".to_string()),
        ..Default::default()
    };
    assert_eq!(store.update(id, fields.clone()).await.unwrap(), 1);
    assert_eq!(store.update(Uuid::new_v4(), fields).await.unwrap(), 0);

    let updated = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(updated.abv, 58.4);
    assert_eq!(updated.notes.as_deref(), Some("toffee"));
}

#[tokio::test]
async fn test_delete_reports_deleted_count() {
    let store = InMemoryStore::new();
    let id = store.insert(measurement(60.0)).await.unwrap();

    assert_eq!(store.delete(id).await.unwrap(), 1);
    assert_eq!(store.delete(id).await.unwrap(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_find_all_and_shared_clone() {
    let store = InMemoryStore::new();
    let view = store.clone();
    store.insert(measurement(60.0)).await.unwrap();
    store.insert(measurement(61.0)).await.unwrap();

    let all = view.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].created_at <= all[1].created_at);
}

#[tokio::test]
async fn test_find_user_by_email() {
    let store = InMemoryStore::<User>::new();
    let user = User::new("a@b.com", HashedCredential::from_stored("hash"));
    store.insert(user.clone()).await.unwrap();

    assert_eq!(store.find_by_email("a@b.com").await.unwrap(), Some(user.clone()));
    assert_eq!(store.find_by_email("x@y.com").await.unwrap(), None);

    store
        .update(user.id, UserFields { email: "c@d.com".to_string() })
        .await
        .unwrap();
    assert!(store.find_by_email("a@b.com").await.unwrap().is_none());
    assert!(store.find_by_email("c@d.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_user_email_is_unique_on_insert_and_update() {
    let store = InMemoryStore::<User>::new();
    let first = User::new("a@b.com", HashedCredential::from_stored("hash"));
    let second = User::new("c@d.com", HashedCredential::from_stored("hash"));
    store.insert(first.clone()).await.unwrap();
    store.insert(second.clone()).await.unwrap();

    let clash = User::new("a@b.com", HashedCredential::from_stored("hash"));
    let err = store.insert(clash).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(store.len().await, 2);

    let err = store
        .update(second.id, UserFields { email: "a@b.com".to_string() })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(store.find_by_id(second.id).await.unwrap().unwrap().email, "c@d.com");

    // rewriting a record with its own key is fine
    let matched = store
        .update(first.id, UserFields { email: "a@b.com".to_string() })
        .await
        .unwrap();
    assert_eq!(matched, 1);
}
