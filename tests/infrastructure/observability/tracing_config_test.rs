use config::Map;
use handa::infrastructure::observability::{TracingConfig, init_tracing};
use handa::presentation::config::LoggingSettings;
use handa::presentation::{Environment, Settings};

#[test]
fn given_no_env_vars_when_creating_default_then_uses_text_format() {
    let config = TracingConfig::default();
    assert!(!config.json_format);
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_logging_settings_when_building_config_then_level_leads_filter() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings("test", &logging);

    assert_eq!(config.environment, "test");
    assert_eq!(config.default_filter, "warn,handa=debug,tower_http=debug");
}

#[test]
fn given_json_enabled_in_settings_when_building_config_then_uses_json() {
    let logging = LoggingSettings {
        level: "info".to_string(),
        enable_json: true,
    };

    assert!(TracingConfig::from_settings("prod", &logging).json_format);
}

#[test]
fn given_installed_subscriber_when_initializing_again_then_returns_error() {
    let settings = Settings::load_from(Environment::Test, Map::new()).unwrap();
    let config = TracingConfig::from_settings("test", &settings.logging);

    assert!(init_tracing(&config, &settings).is_ok());
    assert!(init_tracing(&config, &settings).is_err());
}
