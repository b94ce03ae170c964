use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{ProviderError, RecognitionProvider};
use crate::domain::{RecognitionConfig, RecognitionResult, RecognizerPath};

/// In-memory recognizer registry with canned transcripts.
#[derive(Default)]
pub struct MockRecognitionProvider {
    recognizers: Mutex<HashSet<String>>,
    transcripts: Vec<String>,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MockRecognitionProvider {
    pub fn new(transcripts: Vec<String>) -> Self {
        Self {
            transcripts,
            ..Self::default()
        }
    }

    pub async fn contains(&self, path: &RecognizerPath) -> bool {
        self.recognizers.lock().await.contains(path.as_str())
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecognitionProvider for MockRecognitionProvider {
    async fn fetch_recognizer(&self, path: &RecognizerPath) -> Result<(), ProviderError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.recognizers.lock().await.contains(path.as_str()) {
            Ok(())
        } else {
            Err(ProviderError::ApiRequestFailed(format!(
                "status 404 Not Found: {} not found",
                path
            )))
        }
    }

    async fn create_recognizer(
        &self,
        parent: &str,
        recognizer_id: &str,
        _default_config: &RecognitionConfig,
    ) -> Result<(), ProviderError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let path = format!("{}/recognizers/{}", parent, recognizer_id);
        if self.recognizers.lock().await.insert(path.clone()) {
            Ok(())
        } else {
            Err(ProviderError::ApiRequestFailed(format!(
                "status 409 Conflict: {} already exists",
                path
            )))
        }
    }

    async fn recognize(
        &self,
        _path: &RecognizerPath,
        _config: &RecognitionConfig,
        _audio: &[u8],
    ) -> Result<Vec<RecognitionResult>, ProviderError> {
        Ok(self
            .transcripts
            .iter()
            .map(|t| RecognitionResult::from_transcripts([t.as_str()]))
            .collect())
    }
}
