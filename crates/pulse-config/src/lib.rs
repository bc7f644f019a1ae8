//! # pulse-config
//!
//! Layered configuration loading for Pulse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PULSE_*` prefix, `__` as separator)
//! 2. Project-level `.pulse/config.toml`
//! 3. User-level `~/.config/pulse/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PULSE_BACKEND__URL` -> `backend.url`,
//! `PULSE_DASHBOARD__DETAIL_LIMIT` -> `dashboard.detail_limit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_config::PulseConfig;
//!
//! let config = PulseConfig::load_with_dotenv().expect("config");
//!
//! if config.backend.is_configured() {
//!     println!("Backend: {}", config.backend.rest_url());
//! }
//! ```

mod backend;
mod dashboard;
mod error;

pub use backend::BackendConfig;
pub use dashboard::DashboardConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every Pulse setting.
pub const ENV_PREFIX: &str = "PULSE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl PulseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".pulse/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()?;
        self.dashboard.validate()
    }

    /// The backend section, or an error if it lacks a URL or key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for section `backend`.
    pub fn require_backend(&self) -> Result<&BackendConfig, ConfigError> {
        if self.backend.is_configured() {
            Ok(&self.backend)
        } else {
            Err(ConfigError::NotConfigured {
                section: "backend".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pulse").join("config.toml"))
    }
}
