//! Fixture-file loading and typed reads through the `QuerySource` helpers.

use std::io::Write;

use pretty_assertions::assert_eq;
use pulse_source::{MemorySource, Query, QuerySource, SourceError, fetch_all, fetch_first};
use serde::Deserialize;

const FIXTURE: &str = r#"{
  "v_dashboard_industry_metrics": [
    {"industry": "dental", "total_articles": 120, "article_growth_rate": 4.5},
    {"industry": "aesthetic", "total_articles": "75", "article_growth_rate": null}
  ],
  "v_news_articles_dental_procedures": [
    {"article_id": 1, "article_title": "Old", "published_date": "2024-01-02", "procedure_id": 42},
    {"article_id": 2, "article_title": "Newest", "published_date": "2025-03-01", "procedure_id": 42},
    {"article_id": 3, "article_title": "Other", "published_date": "2025-04-01", "procedure_id": 7},
    {"article_id": 4, "article_title": "Undated", "published_date": null, "procedure_id": 42}
  ]
}"#;

#[derive(Debug, Deserialize, PartialEq)]
struct Title {
    article_title: String,
}

fn write_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn loads_fixture_file_and_reports_its_path() {
    let file = write_fixture();
    let source = MemorySource::from_file(file.path()).unwrap();
    assert_eq!(
        source.table_names(),
        vec![
            "v_dashboard_industry_metrics",
            "v_news_articles_dental_procedures"
        ]
    );
    assert_eq!(source.describe(), file.path().display().to_string());
}

#[tokio::test]
async fn fetch_all_decodes_filtered_newest_first() {
    let source = MemorySource::from_file(write_fixture().path()).unwrap();
    let query = Query::table("v_news_articles_dental_procedures")
        .eq("procedure_id", "42")
        .order_desc("published_date")
        .limit(5);

    let titles: Vec<Title> = fetch_all(&source, &query).await.unwrap();
    let titles: Vec<&str> = titles.iter().map(|t| t.article_title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Old", "Undated"]);
}

#[tokio::test]
async fn fetch_first_returns_none_on_empty_result() {
    let source = MemorySource::from_file(write_fixture().path()).unwrap();
    let query = Query::table("v_dashboard_industry_metrics").eq("industry", "veterinary");
    let row: Option<serde_json::Value> = fetch_first(&source, &query).await.unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn fetch_first_returns_matching_row() {
    let source = MemorySource::from_file(write_fixture().path()).unwrap();
    let query = Query::table("v_dashboard_industry_metrics").eq("industry", "aesthetic");
    let row: Option<serde_json::Value> = fetch_first(&source, &query).await.unwrap();
    assert_eq!(row.unwrap()["total_articles"], "75");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemorySource::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn invalid_json_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    let err = MemorySource::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}
