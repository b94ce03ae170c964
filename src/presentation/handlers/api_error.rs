use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::VoiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps the core's error kinds to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub VoiceError);

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self(VoiceError::InvalidInput(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            VoiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VoiceError::ProviderUnavailable(_) | VoiceError::NoAudioProduced => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<VoiceError> for ApiError {
    fn from(error: VoiceError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::warn!(error = %self.0, "Rejected request");
        }

        let message = match self.0 {
            VoiceError::InvalidInput(message) => message,
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
