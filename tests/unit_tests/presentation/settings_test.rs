use config::Map;
use handa::presentation::{Environment, ProviderKind, Settings};

fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_shipped_config_when_loading_local_then_starts_with_defaults() {
    let settings = Settings::load_from(Environment::Local, Map::new()).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.provider.kind, ProviderKind::Google);
    assert_eq!(settings.google.language_code, "si-LK");
    assert_eq!(
        settings.google.recognizer_path().as_str(),
        "projects/plexiform-bot-479517-t4/locations/global/recognizers/sinhala-recognizer"
    );
}

#[test]
fn given_no_credentials_table_when_loading_then_credentials_are_empty() {
    let settings = Settings::load_from(Environment::Local, Map::new()).unwrap();

    assert!(settings.credentials.access_token.is_none());
    assert!(settings.credentials.token_file.is_none());
    assert!(settings.credentials.api_key.is_none());
}

#[test]
fn given_test_environment_when_loading_then_uses_mock_providers() {
    let settings = Settings::load_from(Environment::Test, Map::new()).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.provider.kind, ProviderKind::Mock);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn given_prod_environment_when_loading_then_logs_as_json() {
    let settings = Settings::load_from(Environment::Prod, Map::new()).unwrap();

    assert!(settings.logging.enable_json);
}

#[test]
fn given_port_variable_when_loading_then_overrides_server_port() {
    let settings = Settings::load_from(Environment::Local, vars(&[("PORT", "8080")])).unwrap();

    assert_eq!(settings.server.port, 8080);
}

#[test]
fn given_port_and_app_port_when_loading_then_port_wins() {
    let settings = Settings::load_from(
        Environment::Local,
        vars(&[("PORT", "9000"), ("APP_SERVER__PORT", "7000")]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 9000);
}

#[test]
fn given_app_variables_when_loading_then_override_nested_sections() {
    let settings = Settings::load_from(
        Environment::Local,
        vars(&[
            ("APP_SERVER__PORT", "7000"),
            ("APP_GOOGLE__PROJECT_ID", "other-project"),
            ("APP_CREDENTIALS__API_KEY", "key-123"),
            ("APP_PROVIDER__KIND", "mock"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 7000);
    assert_eq!(settings.google.project_id, "other-project");
    assert_eq!(settings.credentials.api_key.as_deref(), Some("key-123"));
    assert_eq!(settings.provider.kind, ProviderKind::Mock);
}

#[test]
fn given_unparseable_port_when_loading_then_keeps_configured_port() {
    let settings = Settings::load_from(Environment::Local, vars(&[("PORT", "not-a-port")])).unwrap();

    assert_eq!(settings.server.port, 5000);
}
