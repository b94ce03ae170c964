use std::sync::Arc;

use crate::application::ports::RecognitionProvider;
use crate::domain::{RecognitionConfig, RecognizerPath, join_transcripts};

use super::recognizer_provisioner::RecognizerProvisioner;
use super::voice_error::VoiceError;

pub struct TranscriptionService {
    provider: Arc<dyn RecognitionProvider>,
    provisioner: RecognizerProvisioner,
    recognizer_path: RecognizerPath,
    config: RecognitionConfig,
}

impl TranscriptionService {
    pub fn new(
        provider: Arc<dyn RecognitionProvider>,
        recognizer_path: RecognizerPath,
        config: RecognitionConfig,
    ) -> Self {
        Self {
            provisioner: RecognizerProvisioner::new(Arc::clone(&provider)),
            provider,
            recognizer_path,
            config,
        }
    }

    pub fn recognizer_path(&self) -> &RecognizerPath {
        &self.recognizer_path
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe(&self, audio: &[u8]) -> Result<String, VoiceError> {
        if audio.is_empty() {
            return Err(VoiceError::InvalidInput("audio payload is empty".to_string()));
        }

        self.provisioner
            .ensure_recognizer(&self.recognizer_path, &self.config)
            .await;

        let results = self
            .provider
            .recognize(&self.recognizer_path, &self.config, audio)
            .await?;

        let transcript = join_transcripts(&results);

        tracing::info!(
            results = results.len(),
            chars = transcript.chars().count(),
            "Transcription completed"
        );

        Ok(transcript)
    }
}
