use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::presentation::config::Settings;

use super::TracingConfig;

/// Installs the global subscriber and logs which providers and recognizer the
/// bridge is wired to. Fails if a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig, settings: &Settings) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    let google = &settings.google;
    tracing::info!(
        host = %settings.server.host,
        port = settings.server.port,
        environment = %config.environment,
        json_format = config.json_format,
        provider = ?settings.provider.kind,
        recognizer = %google.recognizer_path(),
        language = %google.language_code,
        tts_encoding = %google.tts_audio_encoding,
        streaming_model = %google.streaming_model,
        "Voice bridge initialized"
    );

    Ok(())
}
