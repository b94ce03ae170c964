use std::sync::Arc;

use futures::stream::StreamExt;

use crate::application::ports::{StreamingSynthesisProvider, SynthesisProvider};
use crate::domain::{
    AggregatedAudio, AudioChunkAggregator, AudioMimeDescriptor, StreamingVoice, SynthesisVoice,
    SynthesizedAudio, WAV_MIME_TYPE, WavFile, container_extension,
};

use super::voice_error::VoiceError;

pub struct SynthesisService {
    provider: Arc<dyn SynthesisProvider>,
    streaming_provider: Arc<dyn StreamingSynthesisProvider>,
    voice: SynthesisVoice,
    streaming_voice: StreamingVoice,
}

impl SynthesisService {
    pub fn new(
        provider: Arc<dyn SynthesisProvider>,
        streaming_provider: Arc<dyn StreamingSynthesisProvider>,
        voice: SynthesisVoice,
        streaming_voice: StreamingVoice,
    ) -> Self {
        Self {
            provider,
            streaming_provider,
            voice,
            streaming_voice,
        }
    }

    /// Single-shot synthesis. The provider already returns an encoded container.
    pub async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, VoiceError> {
        let text = require_text(text)?;
        let audio = self.provider.synthesize(text, &self.voice).await?;

        tracing::info!(
            bytes = audio.bytes.len(),
            mime_type = %audio.mime_type,
            "Speech synthesized"
        );

        Ok(audio)
    }

    /// Streamed synthesis, aggregated into one playable file.
    pub async fn synthesize_streamed(&self, text: &str) -> Result<SynthesizedAudio, VoiceError> {
        let text = require_text(text)?;
        let mut stream = self
            .streaming_provider
            .synthesize_stream(text, &self.streaming_voice)
            .await?;

        let mut aggregator = AudioChunkAggregator::new();
        while let Some(chunk) = stream.next().await {
            aggregator.push(chunk?);
        }

        tracing::debug!(
            chunks = aggregator.chunk_count(),
            bytes = aggregator.byte_count(),
            "Synthesis stream finished"
        );

        let aggregated = aggregator.finish().ok_or(VoiceError::NoAudioProduced)?;
        Ok(into_playable(aggregated))
    }
}

/// Passes self-describing containers through and wraps raw PCM in a WAV header.
pub fn into_playable(audio: AggregatedAudio) -> SynthesizedAudio {
    if container_extension(&audio.last_mime_type).is_some() {
        return SynthesizedAudio::new(audio.payload, audio.last_mime_type);
    }

    let descriptor = AudioMimeDescriptor::parse(&audio.last_mime_type);
    tracing::debug!(
        mime_type = %audio.last_mime_type,
        rate = descriptor.rate,
        bits_per_sample = descriptor.bits_per_sample,
        "Wrapping raw PCM in WAV header"
    );

    let wav = WavFile::encapsulate(audio.payload, descriptor);
    SynthesizedAudio::new(wav.into_bytes(), WAV_MIME_TYPE)
}

fn require_text(text: &str) -> Result<&str, VoiceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VoiceError::InvalidInput("text is empty".to_string()));
    }
    Ok(text)
}
