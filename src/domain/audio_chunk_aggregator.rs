use super::audio_chunk::AudioChunk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedAudio {
    pub payload: Vec<u8>,
    pub last_mime_type: String,
}

/// Concatenates streamed chunk payloads in arrival order.
///
/// Chunks without payload are heartbeat or metadata events: they add no bytes
/// and leave the tracked mime type untouched.
#[derive(Debug, Default)]
pub struct AudioChunkAggregator {
    payload: Vec<u8>,
    last_mime_type: Option<String>,
    chunks: usize,
}

impl AudioChunkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: AudioChunk) {
        if chunk.is_empty() {
            return;
        }
        self.payload.extend_from_slice(&chunk.payload);
        self.last_mime_type = Some(chunk.mime_type);
        self.chunks += 1;
    }

    /// Number of payload-bearing chunks seen so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn byte_count(&self) -> usize {
        self.payload.len()
    }

    /// `None` when no chunk ever carried audio.
    pub fn finish(self) -> Option<AggregatedAudio> {
        let last_mime_type = self.last_mime_type?;
        Some(AggregatedAudio {
            payload: self.payload,
            last_mime_type,
        })
    }
}
