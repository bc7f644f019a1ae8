use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::Cells;

/// A procedure ranked by how often news articles mention it.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq)]
pub struct Procedure {
    pub id: String,
    pub name: String,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub article_mentions: u64,
    /// Mean expected growth (%) across the procedure's market trends.
    pub avg_expected_growth: f64,
}

impl<'de> Deserialize<'de> for Procedure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Cells::deserialize(deserializer)?;
        Ok(Self {
            id: row.text(&["id", "procedure_id"]),
            name: row.text(&["name", "procedure_name"]),
            category_id: row.opt_text(&["category_id"]),
            category_name: row.opt_text(&["category_name"]),
            company_id: row.opt_text(&["company_id"]),
            company_name: row.opt_text(&["company_name"]),
            article_mentions: row.u64(&["article_mentions"]),
            avg_expected_growth: row.f64(&["avg_expected_growth"]),
        })
    }
}
