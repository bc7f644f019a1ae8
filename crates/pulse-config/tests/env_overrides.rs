use figment::Jail;
use pulse_config::PulseConfig;
use pulse_core::enums::Vertical;

#[test]
fn env_vars_fill_backend_section() {
    Jail::expect_with(|jail| {
        jail.set_env("PULSE_BACKEND__URL", "https://env.supabase.co");
        jail.set_env("PULSE_BACKEND__ANON_KEY", "env-anon");

        let config = PulseConfig::load().expect("config loads");
        assert_eq!(config.backend.url, "https://env.supabase.co");
        assert_eq!(config.backend.anon_key, "env-anon");
        assert!(config.require_backend().is_ok());
        Ok(())
    });
}

#[test]
fn env_vars_set_dashboard_vertical_and_limits() {
    Jail::expect_with(|jail| {
        jail.set_env("PULSE_DASHBOARD__DEFAULT_VERTICAL", "aesthetic");
        jail.set_env("PULSE_DASHBOARD__DETAIL_LIMIT", "8");

        let config = PulseConfig::load().expect("config loads");
        assert_eq!(config.dashboard.default_vertical, Vertical::Aesthetic);
        assert_eq!(config.dashboard.detail_limit, 8);
        Ok(())
    });
}

#[test]
fn single_underscore_env_var_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("PULSE_BACKEND_URL", "https://typo.supabase.co");

        let config = PulseConfig::load().expect("config loads");
        assert!(config.backend.url.is_empty());
        Ok(())
    });
}
