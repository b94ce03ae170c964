use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, SynthesisProvider};
use crate::domain::{MP3_MIME_TYPE, SynthesisVoice, SynthesizedAudio, WAV_MIME_TYPE};
use crate::infrastructure::auth::Credentials;
use crate::infrastructure::http::{check_status, request_failed};

pub const DEFAULT_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com/v1";

/// Text-to-Speech v1 `text:synthesize`.
pub struct GoogleTextToSpeechClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl GoogleTextToSpeechClient {
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
struct SynthesizeBody<'a> {
    input: TextInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Serialize)]
struct TextInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

/// Mime type of the container Text-to-Speech returns for an encoding.
pub fn mime_for_encoding(encoding: &str) -> &'static str {
    match encoding.to_ascii_uppercase().as_str() {
        "MP3" | "MP3_64_KBPS" => MP3_MIME_TYPE,
        "OGG_OPUS" => "audio/ogg",
        // LINEAR16, MULAW and ALAW come back with a WAV header.
        "LINEAR16" | "MULAW" | "ALAW" => WAV_MIME_TYPE,
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl SynthesisProvider for GoogleTextToSpeechClient {
    async fn synthesize(
        &self,
        text: &str,
        voice: &SynthesisVoice,
    ) -> Result<SynthesizedAudio, ProviderError> {
        let url = format!("{}/text:synthesize", self.base_url);

        let body = SynthesizeBody {
            input: TextInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: voice.voice_name.as_deref(),
            },
            audio_config: AudioConfig {
                audio_encoding: &voice.audio_encoding,
            },
        };

        let request = self.client.post(&url).json(&body);
        let response = self
            .credentials
            .apply(request)
            .send()
            .await
            .map_err(request_failed)?;
        let response = check_status(response).await?;

        let result: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("parse response: {}", e)))?;

        let bytes = general_purpose::STANDARD
            .decode(result.audio_content.as_bytes())
            .map_err(|e| ProviderError::InvalidResponse(format!("audio content: {}", e)))?;

        Ok(SynthesizedAudio::new(
            bytes,
            mime_for_encoding(&voice.audio_encoding),
        ))
    }
}
