//! Unit tests for the stored records

use serde_json::json;

use crate::domain::entities::{
    Batch, BatchFields, Document, Measurement, MeasurementFields, Spirit, SpiritFields, User,
    UserFields, Vessel, VesselFields,
};
use crate::domain::value_objects::HashedCredential;

fn spirit_fields() -> SpiritFields {
    SpiritFields {
        volume: 200.0,
        name: "Rye New Make".to_string(),
        spirit_type: Some("whiskey".to_string()),
        initial_abv: 63.5,
        recipe_name: Some("Mash Bill 2".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_new_records_get_identity_and_timestamp() {
    let a = Spirit::new(spirit_fields());
    let b = Spirit::new(spirit_fields());
    assert_ne!(a.id, b.id);
    assert!(!a.id.is_nil());
    assert_eq!(a.name, "Rye New Make");
}

#[test]
fn test_overwrite_keeps_id_and_created_at() {
    let mut vessel = Vessel::new(VesselFields {
        volume: 225.0,
        material: Some("american oak".to_string()),
        ..Default::default()
    });
    let id = vessel.id();
    let created_at = vessel.created_at();

    vessel.overwrite(VesselFields {
        volume: 500.0,
        process: Some("ex-sherry".to_string()),
        ..Default::default()
    });

    assert_eq!(vessel.id(), id);
    assert_eq!(vessel.created_at(), created_at);
    assert_eq!(vessel.volume, 500.0);
    // full-field overwrite: omitted fields are cleared
    assert_eq!(vessel.material, None);
    assert_eq!(vessel.process.as_deref(), Some("ex-sherry"));
}

#[test]
fn test_spirit_wire_names() {
    let spirit = Spirit::new(spirit_fields());
    let value = serde_json::to_value(&spirit).unwrap();
    assert!(value.get("_id").is_some());
    assert!(value.get("createdAt").is_some());
    assert_eq!(value["initialABV"], json!(63.5));
    assert_eq!(value["type"], json!("whiskey"));
    assert_eq!(value["recipeName"], json!("Mash Bill 2"));
}

#[test]
fn test_nested_records_deserialize_without_identity() {
    let batch: Batch = serde_json::from_value(json!({
        "volume": 180.0,
        "vessels": [{ "volume": 225.0, "material": "french oak" }],
        "measurements": [{ "abv": 61.2, "image": "s3://samples/1.jpg", "forePalate": "vanilla" }]
    }))
    .unwrap();

    assert!(batch.id.is_nil());
    assert_eq!(batch.vessels[0].material.as_deref(), Some("french oak"));
    assert_eq!(batch.measurements[0].fore_palate.as_deref(), Some("vanilla"));
}

#[test]
fn test_user_overwrite_changes_email_only() {
    let hash = HashedCredential::from_stored("$2b$04$abcdefghijklmnopqrstuu");
    let mut user = User::new("old@cellar.com", hash.clone());
    user.overwrite(UserFields {
        email: "new@cellar.com".to_string(),
    });
    assert_eq!(user.email, "new@cellar.com");
    assert_eq!(user.password_hash, hash);
}

#[test]
fn test_collections() {
    assert_eq!(User::COLLECTION, "users");
    assert_eq!(Spirit::COLLECTION, "spirits");
    assert_eq!(Batch::COLLECTION, "batches");
    assert_eq!(Vessel::COLLECTION, "vessels");
    assert_eq!(Measurement::COLLECTION, "measurements");
    let _ = Batch::new(BatchFields::default());
    let _ = Measurement::new(MeasurementFields::default());
}
