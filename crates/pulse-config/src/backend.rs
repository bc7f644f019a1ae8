//! Hosted query backend (PostgREST / Supabase) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default REST path appended to the project URL.
fn default_rest_path() -> String {
    String::from("/rest/v1")
}

#[derive(Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL (e.g., `https://abc123.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Anonymous (publishable) API key sent as `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the REST endpoint under `url`.
    #[serde(default = "default_rest_path")]
    pub rest_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
            rest_path: default_rest_path(),
        }
    }
}

// Keeps the key out of logs and `{:?}` output.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &self.redacted_key())
            .field("timeout_secs", &self.timeout_secs)
            .field("rest_path", &self.rest_path)
            .finish()
    }
}

impl BackendConfig {
    /// Check if the backend has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Full REST base URL, e.g. `https://abc123.supabase.co/rest/v1`.
    #[must_use]
    pub fn rest_url(&self) -> String {
        let base = self.url.trim().trim_end_matches('/');
        let path = self.rest_path.trim().trim_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Key with everything but the first four characters masked.
    #[must_use]
    pub fn redacted_key(&self) -> String {
        if self.anon_key.is_empty() {
            return String::new();
        }
        let visible: String = self.anon_key.chars().take(4).collect();
        format!("{visible}…")
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP URL or a zero
    /// timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
