//! Query source error types.

use thiserror::Error;

/// Errors that can occur when reading from a query source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested view or table does not exist. Distinct from an empty
    /// result, which is not an error.
    #[error("source unavailable: {view}")]
    Unavailable {
        /// View or table name that was queried.
        view: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body or fixture file.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a fixture file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend section of the configuration is missing a URL or key.
    #[error("backend is not configured (set PULSE_BACKEND__URL and PULSE_BACKEND__ANON_KEY)")]
    NotConfigured,

    /// The query cannot be turned into a request.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl SourceError {
    /// Whether this error means the source itself is missing.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
