use pulse_config::{ENV_PREFIX, PulseConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PulseConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PulseConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let backend_prefix = format!("{ENV_PREFIX}BACKEND");

    let mut warnings = Vec::new();

    if !config.backend.is_configured() && has_env_prefix(&env_keys, &backend_prefix) {
        warnings.push(format!(
            "Backend config appears incomplete while {backend_prefix}* env vars exist. Use double underscores (example: {backend_prefix}__URL, {backend_prefix}__ANON_KEY)."
        ));
    }

    if has_env_prefix(&env_keys, &format!("{ENV_PREFIX}DASHBOARD_"))
        && !has_env_prefix(&env_keys, &format!("{ENV_PREFIX}DASHBOARD__"))
    {
        warnings.push(format!(
            "{ENV_PREFIX}DASHBOARD_* env vars are ignored. Use double underscores (example: {ENV_PREFIX}DASHBOARD__DETAIL_LIMIT)."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
