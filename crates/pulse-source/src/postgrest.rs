//! PostgREST (Supabase REST) client.
//!
//! Each [`Query`] becomes one `GET {rest_url}/{view}?select=*&...` request
//! carrying the anon key as both `apikey` and bearer token.

use std::time::Duration;

use pulse_config::BackendConfig;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;
use crate::http::check_response;
use crate::query::Query;
use crate::source::{QuerySource, Row};

/// HTTP [`QuerySource`] for a PostgREST endpoint.
#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base: String,
    anon_key: String,
}

impl std::fmt::Debug for PostgrestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl PostgrestClient {
    /// Build a client from the `[backend]` section.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] when the URL or key is
    /// missing, or [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, SourceError> {
        if !config.is_configured() {
            return Err(SourceError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("pulse/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, config.rest_url(), config.anon_key.trim()))
    }

    /// Create a client with a custom `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// REST base URL, e.g. `https://abc123.supabase.co/rest/v1`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Full request URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidQuery`] if the base URL or view name
    /// does not form a valid URL.
    pub fn url_for(&self, query: &Query) -> Result<Url, SourceError> {
        if query.source.is_empty() || query.source.contains('/') {
            return Err(SourceError::InvalidQuery(format!(
                "bad source name: {:?}",
                query.source
            )));
        }
        let mut url = Url::parse(&format!("{}/{}", self.base, query.source))
            .map_err(|e| SourceError::InvalidQuery(format!("{}: {e}", self.base)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (key, value) in query.to_params() {
                pairs.append_pair(&key, &value);
            }
        }
        Ok(url)
    }

    /// Build (but do not send) the request for `query`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::url_for`], plus [`SourceError::Http`] if the request
    /// cannot be assembled.
    pub fn build_request(&self, query: &Query) -> Result<reqwest::Request, SourceError> {
        let url = self.url_for(query)?;
        Ok(self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()?)
    }
}

impl QuerySource for PostgrestClient {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send {
        let request = self.build_request(query);
        let http = self.http.clone();
        let view = query.source.clone();
        let described = query.to_string();
        async move {
            let request = request?;
            debug!(query = %described, "postgrest: fetch");
            let resp = check_response(http.execute(request).await?, &view).await?;
            let body = resp.text().await?;
            parse_rows(&view, &body)
        }
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

/// Decode a PostgREST response body into rows.
///
/// PostgREST returns a JSON array of objects. A single object (as sent
/// with `Accept: application/vnd.pgrst.object+json`) is accepted as one row.
fn parse_rows(view: &str, body: &str) -> Result<Vec<Row>, SourceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SourceError::Parse(format!("{view}: {e}")))?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(row) => Ok(row),
                other => Err(SourceError::Parse(format!(
                    "{view} row {i}: expected object, got {other}"
                ))),
            })
            .collect(),
        Value::Object(row) => Ok(vec![row]),
        Value::Null => Ok(Vec::new()),
        other => Err(SourceError::Parse(format!(
            "{view}: expected array, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> PostgrestClient {
        PostgrestClient::with_client(
            reqwest::Client::new(),
            "https://demo.supabase.co/rest/v1/",
            "anon-key-123",
        )
    }

    #[test]
    fn new_rejects_unconfigured_backend() {
        let err = PostgrestClient::new(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, SourceError::NotConfigured));
    }

    #[test]
    fn url_includes_select_filters_order_and_limit() {
        let q = Query::table("v_dashboard_procedures")
            .eq("industry", "dental")
            .order_desc("article_mentions")
            .limit(10);
        let url = client().url_for(&q).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/rest/v1/v_dashboard_procedures?select=*&industry=eq.dental&order=article_mentions.desc.nullslast&limit=10"
        );
    }

    #[test]
    fn url_rejects_path_like_source() {
        let err = client().url_for(&Query::table("../secrets")).unwrap_err();
        assert!(matches!(err, SourceError::InvalidQuery(_)));
    }

    #[test]
    fn request_carries_both_auth_headers() {
        let req = client()
            .build_request(&Query::table("v_dashboard_categories"))
            .unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(req.headers()["apikey"], "anon-key-123");
        assert_eq!(req.headers()["authorization"], "Bearer anon-key-123");
    }

    #[test]
    fn debug_output_hides_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("anon-key-123"));
    }

    #[test]
    fn parse_rows_accepts_array_object_and_null() {
        assert_eq!(parse_rows("v", "[]").unwrap().len(), 0);
        assert_eq!(parse_rows("v", r#"[{"a":1},{"a":2}]"#).unwrap().len(), 2);
        assert_eq!(parse_rows("v", r#"{"a":1}"#).unwrap().len(), 1);
        assert_eq!(parse_rows("v", "null").unwrap().len(), 0);
    }

    #[test]
    fn parse_rows_rejects_garbage() {
        assert!(matches!(parse_rows("v", "<html>"), Err(SourceError::Parse(_))));
        assert!(matches!(parse_rows("v", "[1,2]"), Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    #[ignore = "requires PULSE_BACKEND__URL and PULSE_BACKEND__ANON_KEY"]
    async fn live_metrics_read() {
        let config = BackendConfig {
            url: std::env::var("PULSE_BACKEND__URL").unwrap(),
            anon_key: std::env::var("PULSE_BACKEND__ANON_KEY").unwrap(),
            ..BackendConfig::default()
        };
        let client = PostgrestClient::new(&config).unwrap();
        let rows = client
            .fetch(&Query::table("v_dashboard_industry_metrics").limit(1))
            .await
            .unwrap();
        assert!(rows.len() <= 1);
    }
}
