//! Shared fixtures for dashboard tests.

#![allow(dead_code)]

use pulse_source::{MemorySource, Query, QuerySource, Row, SourceError};
use serde_json::{Value, json};
use tokio::sync::watch;

/// Two verticals' worth of view rows. Every table exists for both.
pub fn fixture() -> Value {
    json!({
        "v_dashboard_industry_metrics": [
            {"industry": "dental", "total_articles": 1200, "total_procedures": 85,
             "total_categories": 12, "total_providers": 40, "article_growth_rate": 12.5,
             "procedure_growth_rate": 3, "provider_growth_rate": -1.5},
            {"industry": "aesthetic", "total_articles": 640, "total_procedures": 52,
             "total_categories": 9, "total_providers": 31, "article_growth_rate": 8,
             "procedure_growth_rate": 4.2, "provider_growth_rate": 2}
        ],
        "v_dashboard_procedures": [
            {"id": 42, "name": "Clear aligners", "industry": "dental", "article_mentions": 88, "avg_expected_growth": 14.5},
            {"id": 43, "name": "Implants", "industry": "dental", "article_mentions": 120, "avg_expected_growth": 6},
            {"id": 90, "name": "Botox", "industry": "aesthetic", "article_mentions": 300, "avg_expected_growth": 9}
        ],
        "v_dashboard_categories": [
            {"id": 7, "name": "Orthodontics", "industry": "dental", "article_count": 140},
            {"id": 20, "name": "Injectables", "industry": "aesthetic", "article_count": 410}
        ],
        "v_dashboard_market_trends": [
            {"trend_name": "Teledentistry", "industry": "dental", "impact_score": 8.5, "expected_growth_rate": 22},
            {"trend_name": "AI imaging", "industry": "dental", "impact_score": 9.1, "expected_growth_rate": 18.5},
            {"trend_name": "Non-surgical lifts", "industry": "aesthetic", "impact_score": 7.2, "expected_growth_rate": 11}
        ],
        "v_dashboard_providers": [
            {"id": "p-1", "name": "Bright Smiles", "industry": "dental", "average_rating": 4.8, "article_mentions": 9},
            {"id": "p-2", "name": "Glow Clinic", "industry": "aesthetic", "average_rating": 4.6, "article_mentions": 4}
        ],
        "v_news_articles_dental_procedures": [
            {"article_id": 1, "article_title": "Aligners 2023", "published_date": "2023-05-01", "procedure_id": 42},
            {"article_id": 2, "article_title": "Aligners Jan", "published_date": "2025-01-10", "procedure_id": 42},
            {"article_id": 3, "article_title": "Implant study", "published_date": "2025-02-01", "procedure_id": 43},
            {"article_id": 4, "article_title": "Aligners Mar", "published_date": "2025-03-15", "procedure_id": 42},
            {"article_id": 5, "article_title": "Aligners Feb", "published_date": "2025-02-20", "procedure_id": 42},
            {"article_id": 6, "article_title": "Aligners 2024", "published_date": "2024-07-04", "procedure_id": 42},
            {"article_id": 7, "article_title": "Aligners 2022", "published_date": "2022-11-30", "procedure_id": 42},
            {"article_id": 8, "article_title": "Aligners undated", "published_date": null, "procedure_id": 42}
        ],
        "v_news_articles_dental_categories": [
            {"article_id": 11, "article_title": "Ortho roundup", "published_date": "2025-01-01", "category_id": 7}
        ],
        "v_news_articles_aesthetic_procedures": [
            {"article_id": 21, "article_title": "Botox pricing", "published_date": "2025-02-02", "procedure_id": 90}
        ],
        "v_news_articles_aesthetic_categories": [
            {"article_id": 31, "article_title": "Filler safety", "published_date": "2025-03-03", "category_id": 20}
        ]
    })
}

pub fn memory() -> MemorySource {
    MemorySource::from_json(fixture()).unwrap()
}

/// Memory source without one table.
pub fn memory_without(table: &str) -> MemorySource {
    let mut value = fixture();
    value.as_object_mut().unwrap().remove(table);
    MemorySource::from_json(value).unwrap()
}

/// Memory source where `table` exists but is empty.
pub fn memory_with_empty(table: &str) -> MemorySource {
    let mut value = fixture();
    value[table] = json!([]);
    MemorySource::from_json(value).unwrap()
}

/// Holds back every read whose query text contains `pattern` until
/// [`Gate::open`] is called.
#[derive(Clone)]
pub struct GatedSource {
    inner: MemorySource,
    pattern: String,
    gate: watch::Receiver<bool>,
}

pub struct Gate(watch::Sender<bool>);

impl Gate {
    pub fn open(&self) {
        self.0.send_replace(true);
    }
}

pub fn gated(pattern: &str) -> (GatedSource, Gate) {
    let (tx, rx) = watch::channel(false);
    (
        GatedSource {
            inner: memory(),
            pattern: pattern.to_string(),
            gate: rx,
        },
        Gate(tx),
    )
}

impl QuerySource for GatedSource {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send {
        let held = query.to_string().contains(&self.pattern);
        let mut gate = self.gate.clone();
        let result = self.inner.query(query);
        async move {
            if held {
                let _ = gate.wait_for(|open| *open).await;
            }
            result
        }
    }

    fn describe(&self) -> String {
        format!("gated({})", self.pattern)
    }
}
