use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Vertical;
use crate::lenient;

/// Headline counts and growth rates for one vertical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IndustryMetrics {
    #[serde(default, deserialize_with = "lenient::vertical_or_default")]
    pub industry: Vertical,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    #[schemars(with = "u64")]
    pub total_articles: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    #[schemars(with = "u64")]
    pub total_procedures: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    #[schemars(with = "u64")]
    pub total_categories: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    #[schemars(with = "u64")]
    pub total_providers: u64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    #[schemars(with = "f64")]
    pub article_growth_rate: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    #[schemars(with = "f64")]
    pub procedure_growth_rate: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    #[schemars(with = "f64")]
    pub provider_growth_rate: f64,
}

impl IndustryMetrics {
    /// All-zero metrics for a vertical with no backing row.
    #[must_use]
    pub fn zeroed(industry: Vertical) -> Self {
        Self {
            industry,
            ..Self::default()
        }
    }
}
