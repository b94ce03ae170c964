use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, RecognitionProvider};
use crate::domain::{RecognitionConfig, RecognitionResult, RecognizerPath};
use crate::infrastructure::auth::Credentials;
use crate::infrastructure::http::{check_status, request_failed};

pub const DEFAULT_SPEECH_BASE_URL: &str = "https://speech.googleapis.com/v2";

/// Speech-to-Text v2 over REST.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl GoogleSpeechClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRecognizerBody<'a> {
    default_recognition_config: &'a RecognitionConfig,
}

#[derive(Serialize)]
struct RecognizeBody<'a> {
    config: &'a RecognitionConfig,
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[async_trait]
impl RecognitionProvider for GoogleSpeechClient {
    async fn fetch_recognizer(&self, path: &RecognizerPath) -> Result<(), ProviderError> {
        let url = format!("{}/{}", self.base_url, path);

        let request = self.client.get(&url);
        let response = self
            .credentials
            .apply(request)
            .send()
            .await
            .map_err(request_failed)?;

        check_status(response).await.map(|_| ())
    }

    async fn create_recognizer(
        &self,
        parent: &str,
        recognizer_id: &str,
        default_config: &RecognitionConfig,
    ) -> Result<(), ProviderError> {
        let url = format!("{}/{}/recognizers", self.base_url, parent);

        tracing::debug!(parent = parent, recognizer_id = recognizer_id, "Creating recognizer");

        let request = self
            .client
            .post(&url)
            .query(&[("recognizerId", recognizer_id)])
            .json(&CreateRecognizerBody {
                default_recognition_config: default_config,
            });
        let response = self
            .credentials
            .apply(request)
            .send()
            .await
            .map_err(request_failed)?;

        // Creation returns a long-running operation; it is not polled.
        check_status(response).await.map(|_| ())
    }

    async fn recognize(
        &self,
        path: &RecognizerPath,
        config: &RecognitionConfig,
        audio: &[u8],
    ) -> Result<Vec<RecognitionResult>, ProviderError> {
        let url = format!("{}/{}:recognize", self.base_url, path);

        tracing::debug!(bytes = audio.len(), "Sending audio to Speech-to-Text");

        let request = self.client.post(&url).json(&RecognizeBody {
            config,
            content: general_purpose::STANDARD.encode(audio),
        });
        let response = self
            .credentials
            .apply(request)
            .send()
            .await
            .map_err(request_failed)?;
        let response = check_status(response).await?;

        let body: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("parse response: {}", e)))?;

        Ok(body.results)
    }
}
