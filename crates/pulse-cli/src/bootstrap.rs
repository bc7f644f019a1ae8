use std::path::Path;

use anyhow::Context;
use pulse_config::PulseConfig;

/// Load `.env` (if present) and then the layered configuration.
pub fn load_config() -> anyhow::Result<PulseConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;
    PulseConfig::load().context("failed to load pulse configuration")
}

/// A project `.env` must parse; a missing one is fine.
fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
