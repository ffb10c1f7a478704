//! Measurement entity: a dated ABV reading with tasting notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::Document;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurement {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Alcohol by volume, in percent
    pub abv: f32,
    /// Reference to a photo of the sample
    pub image: String,
    pub nose: Option<String>,
    pub fore_palate: Option<String>,
    pub mid_palate: Option<String>,
    pub finish: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementFields {
    pub abv: f32,
    pub image: String,
    pub nose: Option<String>,
    pub fore_palate: Option<String>,
    pub mid_palate: Option<String>,
    pub finish: Option<String>,
    pub notes: Option<String>,
}

impl Measurement {
    pub fn new(fields: MeasurementFields) -> Self {
        let mut measurement = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            ..Default::default()
        };
        measurement.overwrite(fields);
        measurement
    }
}

impl Document for Measurement {
    const COLLECTION: &'static str = "measurements";
    const NAME: &'static str = "measurement";
    type Fields = MeasurementFields;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn overwrite(&mut self, fields: MeasurementFields) {
        self.abv = fields.abv;
        self.image = fields.image;
        self.nose = fields.nose;
        self.fore_palate = fields.fore_palate;
        self.mid_palate = fields.mid_palate;
        self.finish = fields.finish;
        self.notes = fields.notes;
    }
}
