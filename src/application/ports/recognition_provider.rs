use async_trait::async_trait;

use crate::domain::{RecognitionConfig, RecognitionResult, RecognizerPath};

use super::ProviderError;

#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    async fn fetch_recognizer(&self, path: &RecognizerPath) -> Result<(), ProviderError>;

    async fn create_recognizer(
        &self,
        parent: &str,
        recognizer_id: &str,
        default_config: &RecognitionConfig,
    ) -> Result<(), ProviderError>;

    async fn recognize(
        &self,
        path: &RecognizerPath,
        config: &RecognitionConfig,
        audio: &[u8],
    ) -> Result<Vec<RecognitionResult>, ProviderError>;
}
