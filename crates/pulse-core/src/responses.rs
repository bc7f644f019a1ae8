//! Composite shapes produced by the aggregator and emitted as JSON by the
//! `pulse` CLI.
//!
//! These use camelCase keys (`trendData`, `newsArticles.byProcedures`) while
//! the entity structs inside keep the backend's snake_case column names.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, IndustryMetrics, MarketTrend, NewsArticle, Procedure, Provider};
use crate::enums::{DetailTarget, Vertical};

/// Chart-ready projection of a [`MarketTrend`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendPoint {
    pub name: String,
    pub value: f64,
    pub growth: f64,
}

impl From<&MarketTrend> for TrendPoint {
    fn from(trend: &MarketTrend) -> Self {
        Self {
            name: trend.trend_name.clone(),
            value: trend.impact_score,
            growth: trend.expected_growth_rate,
        }
    }
}

/// Everything one dashboard load produces for a vertical, except articles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub vertical: Vertical,
    pub metrics: IndustryMetrics,
    pub procedures: Vec<Procedure>,
    pub categories: Vec<Category>,
    pub market_trends: Vec<MarketTrend>,
    pub providers: Vec<Provider>,
    pub trend_data: Vec<TrendPoint>,
}

impl DashboardSnapshot {
    /// Assemble a snapshot, deriving `trend_data` from `market_trends`.
    ///
    /// A missing metrics row becomes zeroed metrics for `vertical`. The
    /// metrics `industry` is always forced to `vertical`.
    #[must_use]
    pub fn assemble(
        vertical: Vertical,
        metrics: Option<IndustryMetrics>,
        procedures: Vec<Procedure>,
        categories: Vec<Category>,
        market_trends: Vec<MarketTrend>,
        providers: Vec<Provider>,
    ) -> Self {
        let mut metrics = metrics.unwrap_or_else(|| IndustryMetrics::zeroed(vertical));
        metrics.industry = vertical;
        let trend_data = market_trends.iter().map(TrendPoint::from).collect();
        Self {
            vertical,
            metrics,
            procedures,
            categories,
            market_trends,
            providers,
            trend_data,
        }
    }
}

/// The two article feeds shown under the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticles {
    pub by_procedures: Vec<NewsArticle>,
    pub by_categories: Vec<NewsArticle>,
}

/// `{ data, newsArticles, loading, error }` as seen by the view tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub vertical: Vertical,
    /// Load cycle this view belongs to.
    pub cycle: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<DashboardSnapshot>,
    pub news_articles: NewsArticles,
}

/// Response from `pulse articles`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub vertical: Vertical,
    pub target: DetailTarget,
    pub articles: Vec<NewsArticle>,
}

/// Response from `pulse check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub ok: bool,
    pub endpoint: String,
    pub latency_ms: u64,
    pub rows: usize,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(name: &str, impact: f64, growth: f64) -> MarketTrend {
        MarketTrend {
            trend_name: name.into(),
            impact_score: impact,
            expected_growth_rate: growth,
        }
    }

    #[test]
    fn trend_data_mirrors_market_trends() {
        let trends = vec![trend("Clear aligners", 9.1, 14.0), trend("Implants", 7.5, 6.2)];
        let snapshot = DashboardSnapshot::assemble(
            Vertical::Dental,
            None,
            Vec::new(),
            Vec::new(),
            trends.clone(),
            Vec::new(),
        );

        assert_eq!(snapshot.trend_data.len(), trends.len());
        for (point, source) in snapshot.trend_data.iter().zip(&trends) {
            assert_eq!(point.name, source.trend_name);
            assert!((point.value - source.impact_score).abs() < f64::EPSILON);
            assert!((point.growth - source.expected_growth_rate).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn missing_metrics_become_zeroed_for_vertical() {
        let snapshot = DashboardSnapshot::assemble(
            Vertical::Aesthetic,
            None,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(snapshot.metrics, IndustryMetrics::zeroed(Vertical::Aesthetic));
        assert!(snapshot.trend_data.is_empty());
    }

    #[test]
    fn metrics_industry_is_forced_to_vertical() {
        let snapshot = DashboardSnapshot::assemble(
            Vertical::Aesthetic,
            Some(IndustryMetrics {
                total_articles: 3,
                ..IndustryMetrics::default()
            }),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(snapshot.metrics.industry, Vertical::Aesthetic);
        assert_eq!(snapshot.metrics.total_articles, 3);
    }

    #[test]
    fn view_serializes_camel_case_keys() {
        let view = DashboardView {
            vertical: Vertical::Dental,
            cycle: 1,
            loading: true,
            error: None,
            data: None,
            news_articles: NewsArticles::default(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["newsArticles"]["byProcedures"].is_array());
        assert!(json["newsArticles"]["byCategories"].is_array());
        assert_eq!(json["loading"], true);
    }
}
