use std::path::PathBuf;

use handa::infrastructure::auth::{Credentials, CredentialsError};
use handa::presentation::config::CredentialsSettings;

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_token_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("handa-{}-{}", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn given_configured_access_token_when_resolving_then_returns_bearer_token() {
    let settings = CredentialsSettings {
        access_token: Some("ya29.configured".to_string()),
        token_file: None,
        api_key: Some("ignored".to_string()),
    };

    let credentials = Credentials::resolve_with(&settings, no_env).unwrap();

    assert_eq!(credentials, Credentials::BearerToken("ya29.configured".to_string()));
}

#[test]
fn given_token_file_when_resolving_then_trimmed_file_contents_are_used() {
    let path = temp_token_file("token", "  ya29.from-file\n");
    let settings = CredentialsSettings {
        token_file: Some(path.clone()),
        ..CredentialsSettings::default()
    };

    let credentials = Credentials::resolve_with(&settings, no_env).unwrap();

    assert_eq!(credentials, Credentials::BearerToken("ya29.from-file".to_string()));
    std::fs::remove_file(path).ok();
}

#[test]
fn given_missing_token_file_when_resolving_then_returns_unreadable() {
    let settings = CredentialsSettings {
        token_file: Some(PathBuf::from("/definitely/not/here/token")),
        ..CredentialsSettings::default()
    };

    let result = Credentials::resolve_with(&settings, no_env);

    assert!(matches!(result, Err(CredentialsError::Unreadable { .. })));
}

#[test]
fn given_only_env_token_when_resolving_then_env_token_is_used() {
    let settings = CredentialsSettings::default();

    let credentials = Credentials::resolve_with(&settings, |name| {
        (name == "GOOGLE_ACCESS_TOKEN").then(|| "ya29.env".to_string())
    })
    .unwrap();

    assert_eq!(credentials, Credentials::BearerToken("ya29.env".to_string()));
}

#[test]
fn given_only_api_key_env_when_resolving_then_returns_api_key() {
    let settings = CredentialsSettings::default();

    let credentials = Credentials::resolve_with(&settings, |name| {
        (name == "GOOGLE_API_KEY").then(|| "AIza-key".to_string())
    })
    .unwrap();

    assert_eq!(credentials, Credentials::ApiKey("AIza-key".to_string()));
}

#[test]
fn given_blank_values_everywhere_when_resolving_then_returns_missing() {
    let settings = CredentialsSettings {
        access_token: Some("   ".to_string()),
        token_file: None,
        api_key: Some(String::new()),
    };

    let result = Credentials::resolve_with(&settings, |_| Some(" ".to_string()));

    assert!(matches!(result, Err(CredentialsError::Missing)));
}

#[test]
fn given_credentials_when_debug_formatted_then_secret_is_hidden() {
    let credentials = Credentials::BearerToken("ya29.secret".to_string());

    let rendered = format!("{:?}", credentials);

    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("REDACTED"));
}
