use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use handa::application::services::{SynthesisService, TranscriptionService};
use handa::infrastructure::ProviderFactory;
use handa::infrastructure::observability::{TracingConfig, init_tracing};
use handa::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment.as_str(), &settings.logging),
        &settings,
    )?;

    if settings.google.project_id.is_empty() {
        tracing::warn!("google.project_id is empty; recognizer paths will not resolve");
    }

    let providers = ProviderFactory::create(
        settings.provider.kind,
        &settings.google,
        &settings.credentials,
    )?;

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&providers.recognition),
        settings.google.recognizer_path(),
        settings.google.recognition_config(),
    ));

    let synthesis_service = Arc::new(SynthesisService::new(
        Arc::clone(&providers.synthesis),
        Arc::clone(&providers.streaming_synthesis),
        settings.google.synthesis_voice(),
        settings.google.streaming_voice(),
    ));

    tracing::info!(
        recognizer = %transcription_service.recognizer_path(),
        provider = ?settings.provider.kind,
        "Voice services ready"
    );

    let state = AppState {
        transcription_service,
        synthesis_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
