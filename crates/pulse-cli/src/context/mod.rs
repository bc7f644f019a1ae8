mod config_warnings;
mod source;

pub use config_warnings::warn_unconfigured;
pub use source::AnySource;

use anyhow::Context;
use pulse_config::PulseConfig;
use pulse_core::enums::Vertical;
use pulse_source::{MemorySource, PostgrestClient, QuerySource};

use crate::cli::GlobalFlags;

/// Everything a command handler needs: effective config, the query source,
/// and the vertical to start on.
#[derive(Debug)]
pub struct AppContext {
    pub config: PulseConfig,
    pub source: AnySource,
    pub vertical: Vertical,
}

impl AppContext {
    /// Pick the source: `--fixture` wins, otherwise the configured backend.
    pub fn init(config: PulseConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let source = if let Some(path) = &flags.fixture {
            let memory = MemorySource::from_file(path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?;
            AnySource::Memory(memory)
        } else {
            let backend = config.require_backend().context(
                "no backend configured; set PULSE_BACKEND__URL and PULSE_BACKEND__ANON_KEY or pass --fixture",
            )?;
            AnySource::Postgrest(
                PostgrestClient::new(backend).context("failed to build backend client")?,
            )
        };
        let vertical = flags.vertical.unwrap_or(config.dashboard.default_vertical);
        tracing::debug!(source = %source.describe(), %vertical, "context ready");
        Ok(Self {
            config,
            source,
            vertical,
        })
    }
}
