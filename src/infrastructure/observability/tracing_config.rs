use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: &str, logging: &LoggingSettings) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.to_string(),
            json_format: defaults.json_format || logging.enable_json,
            default_filter: format!("{},handa=debug,tower_http=debug", logging.level),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,handa=debug,tower_http=debug".to_string(),
        }
    }
}
