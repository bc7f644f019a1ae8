//! Shared HTTP response helpers for the PostgREST client.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, missing relation → [`SourceError::Unavailable`], non-success →
//! [`SourceError::Api`]) so request construction stays separate from
//! response classification.

use crate::error::SourceError;

/// PostgREST error codes meaning the relation is not exposed or missing.
const MISSING_RELATION_CODES: [&str; 2] = ["PGRST205", "42P01"];

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **404**, or a body carrying a missing-relation code →
///   [`SourceError::Unavailable`] naming `view`.
/// - **Non-success status** → [`SourceError::Api`] with status code and
///   response body.
pub async fn check_response(
    resp: reqwest::Response,
    view: &str,
) -> Result<reqwest::Response, SourceError> {
    let status = resp.status();
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp.text().await.unwrap_or_default();
    if status == 404 || is_missing_relation(&message) {
        return Err(SourceError::Unavailable {
            view: view.to_string(),
        });
    }
    Err(SourceError::Api {
        status: status.as_u16(),
        message,
    })
}

fn is_missing_relation(body: &str) -> bool {
    MISSING_RELATION_CODES.iter().any(|code| body.contains(code))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
