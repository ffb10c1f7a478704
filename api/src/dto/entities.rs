//! Request bodies for the aging entities.
//!
//! Each body carries every mutable field of its entity: create builds a new
//! record from it and update overwrites all stored fields with it.

use aging_core::domain::entities::{
    Batch, BatchFields, Document, Measurement, MeasurementFields, Spirit, SpiritFields, Vessel,
    VesselFields,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::routes::Collection;

/// A validated request body that maps onto one entity type
pub trait EntityRequest: DeserializeOwned + Validate + 'static {
    type Entity: Collection;

    fn into_fields(self) -> <Self::Entity as Document>::Fields;

    /// Build a new record with a fresh id and creation time
    fn into_entity(self) -> Self::Entity;
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpiritRequest {
    #[serde(default)]
    pub batches: Vec<Batch>,

    #[validate(range(exclusive_min = 0.0, message = "volume must be greater than 0"))]
    pub volume: f32,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type", default)]
    pub spirit_type: Option<String>,

    #[serde(rename = "initialABV")]
    #[validate(range(exclusive_min = 0.0, message = "initialABV must be greater than 0"))]
    pub initial_abv: f32,

    #[serde(default)]
    pub recipe_name: Option<String>,
}

impl EntityRequest for SpiritRequest {
    type Entity = Spirit;

    fn into_fields(self) -> SpiritFields {
        SpiritFields {
            batches: self.batches,
            volume: self.volume,
            name: self.name,
            spirit_type: self.spirit_type,
            initial_abv: self.initial_abv,
            recipe_name: self.recipe_name,
        }
    }

    fn into_entity(self) -> Spirit {
        Spirit::new(self.into_fields())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(default)]
    pub vessels: Vec<Vessel>,

    #[serde(default)]
    pub measurements: Vec<Measurement>,

    #[validate(range(exclusive_min = 0.0, message = "volume must be greater than 0"))]
    pub volume: f32,
}

impl EntityRequest for BatchRequest {
    type Entity = Batch;

    fn into_fields(self) -> BatchFields {
        BatchFields {
            vessels: self.vessels,
            measurements: self.measurements,
            volume: self.volume,
        }
    }

    fn into_entity(self) -> Batch {
        Batch::new(self.into_fields())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VesselRequest {
    #[serde(default)]
    pub batches: Vec<Batch>,

    #[validate(range(exclusive_min = 0.0, message = "volume must be greater than 0"))]
    pub volume: f32,

    #[serde(default)]
    pub material: Option<String>,

    #[serde(default)]
    pub process: Option<String>,
}

impl EntityRequest for VesselRequest {
    type Entity = Vessel;

    fn into_fields(self) -> VesselFields {
        VesselFields {
            batches: self.batches,
            volume: self.volume,
            material: self.material,
            process: self.process,
        }
    }

    fn into_entity(self) -> Vessel {
        Vessel::new(self.into_fields())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRequest {
    #[validate(range(exclusive_min = 0.0, message = "abv must be greater than 0"))]
    pub abv: f32,

    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,

    #[serde(default)]
    pub nose: Option<String>,

    #[serde(default)]
    pub fore_palate: Option<String>,

    #[serde(default)]
    pub mid_palate: Option<String>,

    #[serde(default)]
    pub finish: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl EntityRequest for MeasurementRequest {
    type Entity = Measurement;

    fn into_fields(self) -> MeasurementFields {
        MeasurementFields {
            abv: self.abv,
            image: self.image,
            nose: self.nose,
            fore_palate: self.fore_palate,
            mid_palate: self.mid_palate,
            finish: self.finish,
            notes: self.notes,
        }
    }

    fn into_entity(self) -> Measurement {
        Measurement::new(self.into_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spirit_request_wire_names() {
        let request: SpiritRequest = serde_json::from_value(json!({
            "volume": 40.0,
            "name": "Rye",
            "type": "whiskey",
            "initialABV": 63.5,
            "recipeName": "house rye"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let spirit = request.into_entity();
        assert_eq!(spirit.spirit_type.as_deref(), Some("whiskey"));
        assert_eq!(spirit.initial_abv, 63.5);
        assert_eq!(spirit.recipe_name.as_deref(), Some("house rye"));
        assert!(spirit.batches.is_empty());
    }

    #[test]
    fn test_required_values_are_validated() {
        let request: SpiritRequest = serde_json::from_value(json!({
            "volume": 0.0,
            "name": "",
            "initialABV": 40.0
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("volume"));
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("initial_abv"));
    }

    #[test]
    fn test_measurement_requires_image() {
        let request: MeasurementRequest = serde_json::from_value(json!({
            "abv": 58.2,
            "image": "",
            "forePalate": "vanilla"
        }))
        .unwrap();

        assert!(request.validate().is_err());
        assert_eq!(request.into_fields().fore_palate.as_deref(), Some("vanilla"));
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let result = serde_json::from_value::<BatchRequest>(json!({ "vessels": [] }));
        assert!(result.is_err());
    }
}
