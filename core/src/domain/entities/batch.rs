//! Batch entity: a portion of a spirit aging across one or more vessels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::Document;
use super::measurement::Measurement;
use super::vessel::Vessel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Batch {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vessels: Vec<Vessel>,
    pub measurements: Vec<Measurement>,
    pub volume: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchFields {
    pub vessels: Vec<Vessel>,
    pub measurements: Vec<Measurement>,
    pub volume: f32,
}

impl Batch {
    pub fn new(fields: BatchFields) -> Self {
        let mut batch = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            ..Default::default()
        };
        batch.overwrite(fields);
        batch
    }
}

impl Document for Batch {
    const COLLECTION: &'static str = "batches";
    const NAME: &'static str = "batch";
    type Fields = BatchFields;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn overwrite(&mut self, fields: BatchFields) {
        self.vessels = fields.vessels;
        self.measurements = fields.measurements;
        self.volume = fields.volume;
    }
}
