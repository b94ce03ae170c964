use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::Stream;

use crate::domain::{AudioChunk, StreamingVoice, SynthesisVoice, SynthesizedAudio};

use super::ProviderError;

pub type AudioChunkStream = Pin<Box<dyn Stream<Item = Result<AudioChunk, ProviderError>> + Send>>;

#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Returns a fully encoded container.
    async fn synthesize(
        &self,
        text: &str,
        voice: &SynthesisVoice,
    ) -> Result<SynthesizedAudio, ProviderError>;
}

#[async_trait]
pub trait StreamingSynthesisProvider: Send + Sync {
    /// Finite and not restartable. Chunks arrive in playback order.
    async fn synthesize_stream(
        &self,
        text: &str,
        voice: &StreamingVoice,
    ) -> Result<AudioChunkStream, ProviderError>;
}
