use async_trait::async_trait;

use crate::application::ports::{
    AudioChunkStream, ProviderError, StreamingSynthesisProvider, SynthesisProvider,
};
use crate::domain::{
    AudioChunk, MP3_MIME_TYPE, StreamingVoice, SynthesisVoice, SynthesizedAudio,
};

/// Replays canned audio for both synthesis paths.
pub struct MockSynthesisProvider {
    encoded: Vec<u8>,
    chunks: Vec<AudioChunk>,
}

impl MockSynthesisProvider {
    pub fn new(encoded: Vec<u8>, chunks: Vec<AudioChunk>) -> Self {
        Self { encoded, chunks }
    }
}

impl Default for MockSynthesisProvider {
    /// A short MP3 frame marker for single-shot calls and 0.1s of 24 kHz silence when streamed.
    fn default() -> Self {
        Self::new(
            b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec(),
            vec![AudioChunk::new(vec![0u8; 4_800], "audio/L16;codec=pcm;rate=24000")],
        )
    }
}

#[async_trait]
impl SynthesisProvider for MockSynthesisProvider {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &SynthesisVoice,
    ) -> Result<SynthesizedAudio, ProviderError> {
        Ok(SynthesizedAudio::new(self.encoded.clone(), MP3_MIME_TYPE))
    }
}

#[async_trait]
impl StreamingSynthesisProvider for MockSynthesisProvider {
    async fn synthesize_stream(
        &self,
        _text: &str,
        _voice: &StreamingVoice,
    ) -> Result<AudioChunkStream, ProviderError> {
        let chunks: Vec<Result<AudioChunk, ProviderError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        Ok(Box::pin(futures::stream::iter(chunks)))
    }
}
