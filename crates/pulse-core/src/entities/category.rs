use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::Cells;

/// A procedure category ranked by article count.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub article_count: u64,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Cells::deserialize(deserializer)?;
        Ok(Self {
            id: row.text(&["id", "category_id"]),
            name: row.text(&["name", "category_name"]),
            article_count: row.u64(&["article_count"]),
        })
    }
}
