use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::api_error::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let audio = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::invalid_input("No file part")),
            Err(e) => {
                return Err(ApiError::invalid_input(format!(
                    "Failed to read multipart: {}",
                    e
                )));
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if field.file_name().is_none_or(str::is_empty) {
            return Err(ApiError::invalid_input("No selected file"));
        }

        tracing::debug!(
            filename = field.file_name().unwrap_or_default(),
            content_type = field.content_type().unwrap_or("application/octet-stream"),
            "Receiving audio upload"
        );

        break field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_input(format!("Failed to read file: {}", e)))?;
    };

    if audio.is_empty() {
        return Err(ApiError::invalid_input("Uploaded file is empty"));
    }

    let transcript = state.transcription_service.transcribe(&audio).await?;

    Ok(Json(TranscribeResponse { transcript }))
}
