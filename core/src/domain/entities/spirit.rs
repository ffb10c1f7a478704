//! Spirit entity: a distilled liquid and the batches it was split into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::batch::Batch;
use super::document::Document;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spirit {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub batches: Vec<Batch>,
    /// Volume in litres
    pub volume: f32,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub spirit_type: Option<String>,
    #[serde(rename = "initialABV")]
    pub initial_abv: f32,
    pub recipe_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpiritFields {
    pub batches: Vec<Batch>,
    pub volume: f32,
    pub name: String,
    pub spirit_type: Option<String>,
    pub initial_abv: f32,
    pub recipe_name: Option<String>,
}

impl Spirit {
    pub fn new(fields: SpiritFields) -> Self {
        let mut spirit = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            ..Default::default()
        };
        spirit.overwrite(fields);
        spirit
    }
}

impl Document for Spirit {
    const COLLECTION: &'static str = "spirits";
    const NAME: &'static str = "spirit";
    type Fields = SpiritFields;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn overwrite(&mut self, fields: SpiritFields) {
        self.batches = fields.batches;
        self.volume = fields.volume;
        self.name = fields.name;
        self.spirit_type = fields.spirit_type;
        self.initial_abv = fields.initial_abv;
        self.recipe_name = fields.recipe_name;
    }
}
