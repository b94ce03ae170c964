use std::sync::Arc;

use crate::application::ports::{RecognitionProvider, StreamingSynthesisProvider, SynthesisProvider};
use crate::presentation::config::{CredentialsSettings, GoogleSettings, ProviderKind};

use super::auth::{Credentials, CredentialsError};
use super::recognition::{GoogleSpeechClient, MockRecognitionProvider};
use super::synthesis::{GeminiStreamingClient, GoogleTextToSpeechClient, MockSynthesisProvider};

pub struct Providers {
    pub recognition: Arc<dyn RecognitionProvider>,
    pub synthesis: Arc<dyn SynthesisProvider>,
    pub streaming_synthesis: Arc<dyn StreamingSynthesisProvider>,
}

pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create(
        kind: ProviderKind,
        google: &GoogleSettings,
        credentials: &CredentialsSettings,
    ) -> Result<Providers, CredentialsError> {
        match kind {
            ProviderKind::Google => {
                let credentials = Credentials::resolve(credentials)?;
                tracing::info!(
                    project = %google.project_id,
                    credentials = ?credentials,
                    "Using Google speech providers"
                );
                Ok(Providers {
                    recognition: Arc::new(GoogleSpeechClient::new(
                        &google.speech_base_url,
                        credentials.clone(),
                    )),
                    synthesis: Arc::new(GoogleTextToSpeechClient::new(
                        &google.tts_base_url,
                        credentials.clone(),
                    )),
                    streaming_synthesis: Arc::new(GeminiStreamingClient::new(
                        &google.streaming_base_url,
                        credentials,
                    )),
                })
            }
            ProviderKind::Mock => {
                tracing::warn!("Using mock speech providers");
                let synthesis = Arc::new(MockSynthesisProvider::default());
                Ok(Providers {
                    recognition: Arc::new(MockRecognitionProvider::new(vec![
                        "ආයුබෝවන්".to_string(),
                    ])),
                    synthesis: synthesis.clone(),
                    streaming_synthesis: synthesis,
                })
            }
        }
    }
}
