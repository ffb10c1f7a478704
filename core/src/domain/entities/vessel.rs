//! Vessel entity: a cask, barrel or tank that batches age in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::batch::Batch;
use super::document::Document;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vessel {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub batches: Vec<Batch>,
    /// Capacity in litres
    pub volume: f32,
    /// e.g. "american oak"
    pub material: Option<String>,
    /// e.g. "charred", "ex-sherry"
    pub process: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselFields {
    pub batches: Vec<Batch>,
    pub volume: f32,
    pub material: Option<String>,
    pub process: Option<String>,
}

impl Vessel {
    pub fn new(fields: VesselFields) -> Self {
        let mut vessel = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            ..Default::default()
        };
        vessel.overwrite(fields);
        vessel
    }
}

impl Document for Vessel {
    const COLLECTION: &'static str = "vessels";
    const NAME: &'static str = "vessel";
    type Fields = VesselFields;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn overwrite(&mut self, fields: VesselFields) {
        self.batches = fields.batches;
        self.volume = fields.volume;
        self.material = fields.material;
        self.process = fields.process;
    }
}
