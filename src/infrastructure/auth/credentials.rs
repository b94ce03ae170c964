use std::fmt;
use std::path::PathBuf;

use reqwest::RequestBuilder;

use crate::presentation::config::CredentialsSettings;

pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Opaque authentication handle attached to every provider request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    BearerToken(String),
    ApiKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error(
        "no credentials configured: set credentials.access_token, credentials.token_file, GOOGLE_ACCESS_TOKEN or GOOGLE_API_KEY"
    )]
    Missing,
    #[error("failed to read token file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Credentials {
    pub fn resolve(settings: &CredentialsSettings) -> Result<Self, CredentialsError> {
        Self::resolve_with(settings, |name| std::env::var(name).ok())
    }

    /// Order: configured token, token file, token env var, configured key, key env var.
    pub fn resolve_with<F>(settings: &CredentialsSettings, env: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = non_empty(settings.access_token.clone()) {
            return Ok(Self::BearerToken(token));
        }

        if let Some(path) = &settings.token_file {
            let contents =
                std::fs::read_to_string(path).map_err(|source| CredentialsError::Unreadable {
                    path: path.clone(),
                    source,
                })?;
            if let Some(token) = non_empty(Some(contents)) {
                return Ok(Self::BearerToken(token));
            }
        }

        if let Some(token) = non_empty(env(ACCESS_TOKEN_ENV)) {
            return Ok(Self::BearerToken(token));
        }

        non_empty(settings.api_key.clone())
            .or_else(|| non_empty(env(API_KEY_ENV)))
            .map(Self::ApiKey)
            .ok_or(CredentialsError::Missing)
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::ApiKey(key) => request.header(API_KEY_HEADER, key),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BearerToken(_) => f.write_str("Credentials::BearerToken([REDACTED])"),
            Self::ApiKey(_) => f.write_str("Credentials::ApiKey([REDACTED])"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
