use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::Cells;

/// A provider (clinic, practice, brand) ranked by average rating.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub average_rating: f64,
    pub article_mentions: u64,
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Cells::deserialize(deserializer)?;
        Ok(Self {
            id: row.text(&["id", "provider_id"]),
            name: row.text(&["name", "provider_name"]),
            average_rating: row.f64(&["average_rating"]),
            article_mentions: row.u64(&["article_mentions"]),
        })
    }
}
