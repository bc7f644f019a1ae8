use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::Cells;

/// A market trend ranked by impact score.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq)]
pub struct MarketTrend {
    pub trend_name: String,
    pub impact_score: f64,
    pub expected_growth_rate: f64,
}

impl<'de> Deserialize<'de> for MarketTrend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Cells::deserialize(deserializer)?;
        Ok(Self {
            trend_name: row.text(&["trend_name", "name"]),
            impact_score: row.f64(&["impact_score"]),
            expected_growth_rate: row.f64(&["expected_growth_rate"]),
        })
    }
}
