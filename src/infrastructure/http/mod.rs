use reqwest::Response;

use crate::application::ports::ProviderError;

/// Turns a non-2xx response into an error carrying the status and body.
pub async fn check_status(response: Response) -> Result<Response, ProviderError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ProviderError::ApiRequestFailed(format!(
        "status {}: {}",
        status, body
    )))
}

pub fn request_failed(e: reqwest::Error) -> ProviderError {
    ProviderError::ApiRequestFailed(format!("request: {}", e))
}
