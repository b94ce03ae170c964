use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::domain::SynthesizedAudio;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::api_error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl SynthesizeRequest {
    /// Unwraps the body, turning any JSON rejection into the usual `{"error": ..}` response.
    fn from_body(body: Result<Json<Self>, JsonRejection>) -> Result<Self, ApiError> {
        body.map(|Json(request)| request).map_err(|rejection| {
            ApiError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })
    }

    fn text(&self) -> Result<&str, ApiError> {
        self.text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::invalid_input("No text provided"))
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn synthesize_handler(
    State(state): State<AppState>,
    body: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = SynthesizeRequest::from_body(body)?;
    let text = request.text()?;
    tracing::debug!(text = %preview_text(text), "Synthesizing speech");

    let audio = state.synthesis_service.synthesize(text).await?;
    Ok(audio_response(audio))
}

#[tracing::instrument(skip(state, body))]
pub async fn stream_synthesize_handler(
    State(state): State<AppState>,
    body: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = SynthesizeRequest::from_body(body)?;
    let text = request.text()?;
    tracing::debug!(text = %preview_text(text), "Streaming speech synthesis");

    let audio = state.synthesis_service.synthesize_streamed(text).await?;
    Ok(audio_response(audio))
}

fn audio_response(audio: SynthesizedAudio) -> Response {
    ([(header::CONTENT_TYPE, audio.mime_type)], audio.bytes).into_response()
}
