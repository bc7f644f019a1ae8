use pulse_config::PulseConfig;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `pulse config`. The anon key is always redacted.
pub fn handle(config: &PulseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&redacted(config)?, flags.format)
}

fn redacted(config: &PulseConfig) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(config)?;
    if let Some(backend) = value.get_mut("backend").and_then(Value::as_object_mut) {
        backend.insert("anon_key".into(), Value::from(config.backend.redacted_key()));
        backend.insert("rest_url".into(), Value::from(config.backend.rest_url()));
        backend.insert("configured".into(), Value::from(config.backend.is_configured()));
    }
    Ok(value)
}
