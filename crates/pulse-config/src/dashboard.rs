//! Dashboard read limits and default vertical.

use pulse_core::enums::Vertical;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_procedure_limit() -> usize {
    10
}

const fn default_category_limit() -> usize {
    10
}

const fn default_trend_limit() -> usize {
    5
}

const fn default_provider_limit() -> usize {
    5
}

const fn default_news_limit() -> usize {
    10
}

const fn default_detail_limit() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Vertical shown on startup.
    #[serde(default)]
    pub default_vertical: Vertical,

    /// Top-N procedures by article mentions.
    #[serde(default = "default_procedure_limit")]
    pub procedure_limit: usize,

    /// Top-N categories by article count.
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,

    /// Top-N market trends by impact score.
    #[serde(default = "default_trend_limit")]
    pub trend_limit: usize,

    /// Top-N providers by rating.
    #[serde(default = "default_provider_limit")]
    pub provider_limit: usize,

    /// Articles per news feed tab.
    #[serde(default = "default_news_limit")]
    pub news_limit: usize,

    /// Articles in a procedure/category drill-down.
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_vertical: Vertical::default(),
            procedure_limit: default_procedure_limit(),
            category_limit: default_category_limit(),
            trend_limit: default_trend_limit(),
            provider_limit: default_provider_limit(),
            news_limit: default_news_limit(),
            detail_limit: default_detail_limit(),
        }
    }
}

impl DashboardConfig {
    /// Every limit must be at least one row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("dashboard.procedure_limit", self.procedure_limit),
            ("dashboard.category_limit", self.category_limit),
            ("dashboard.trend_limit", self.trend_limit),
            ("dashboard.provider_limit", self.provider_limit),
            ("dashboard.news_limit", self.news_limit),
            ("dashboard.detail_limit", self.detail_limit),
        ];
        for (field, value) in limits {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be at least 1".into(),
                });
            }
        }
        Ok(())
    }
}
