use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use futures::stream::StreamExt;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioChunkStream, ProviderError, StreamingSynthesisProvider};
use crate::domain::{AudioChunk, StreamingVoice};
use crate::infrastructure::auth::Credentials;
use crate::infrastructure::http::{check_status, request_failed};

use super::sse_buffer::SseBuffer;

pub const DEFAULT_STREAMING_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Streams audio from `models/{model}:streamGenerateContent` as server-sent events.
pub struct GeminiStreamingClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl GeminiStreamingClient {
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
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'a str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentEvent {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    data: String,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: String,
}

/// Converts one event payload into chunks.
///
/// An event that carries no inline audio yields a single empty chunk so the
/// aggregator sees it and skips it.
pub fn parse_event(data: &str) -> Result<Vec<AudioChunk>, ProviderError> {
    let event: GenerateContentEvent = serde_json::from_str(data)
        .map_err(|e| ProviderError::InvalidResponse(format!("stream event: {}", e)))?;

    if let Some(error) = event.error {
        return Err(ProviderError::ApiRequestFailed(format!(
            "stream error {}: {}",
            error.code.unwrap_or_default(),
            error.message
        )));
    }

    let mut chunks = Vec::new();
    for inline in event
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.inline_data)
    {
        let payload = general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| ProviderError::InvalidResponse(format!("inline audio: {}", e)))?;
        chunks.push(AudioChunk::new(payload, inline.mime_type));
    }

    if chunks.is_empty() {
        chunks.push(AudioChunk::new(Vec::new(), String::new()));
    }

    Ok(chunks)
}

#[async_trait]
impl StreamingSynthesisProvider for GeminiStreamingClient {
    async fn synthesize_stream(
        &self,
        text: &str,
        voice: &StreamingVoice,
    ) -> Result<AudioChunkStream, ProviderError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent",
            self.base_url, voice.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &voice.voice_name,
                        },
                    },
                },
            },
        };

        tracing::debug!(model = %voice.model, voice = %voice.voice_name, "Opening synthesis stream");

        let request = self
            .client
            .post(&url)
            .query(&[("alt", "sse")])
            .json(&body);
        let response = self
            .credentials
            .apply(request)
            .send()
            .await
            .map_err(request_failed)?;
        let response = check_status(response).await?;

        let mut body = response.bytes_stream();
        let chunk_stream = async_stream::stream! {
            let mut buffer = SseBuffer::new();
            while let Some(read) = body.next().await {
                let bytes = match read {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        yield Err(ProviderError::ApiRequestFailed(format!("stream: {}", e)));
                        return;
                    }
                };
                for data in buffer.push(&bytes) {
                    match parse_event(&data) {
                        Ok(chunks) => {
                            for chunk in chunks {
                                yield Ok(chunk);
                            }
                        }
                        Err(e) => {
                            yield Err(e);
                            return;
                        }
                    }
                }
            }
            if let Some(data) = buffer.finish() {
                match parse_event(&data) {
                    Ok(chunks) => {
                        for chunk in chunks {
                            yield Ok(chunk);
                        }
                    }
                    Err(e) => yield Err(e),
                }
            }
        };

        Ok(Box::pin(chunk_stream))
    }
}
