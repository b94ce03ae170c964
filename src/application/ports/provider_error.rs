#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
