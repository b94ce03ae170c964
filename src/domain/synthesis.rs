pub const WAV_MIME_TYPE: &str = "audio/wav";
pub const MP3_MIME_TYPE: &str = "audio/mpeg";

/// Voice selection for single-shot synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisVoice {
    pub language_code: String,
    pub voice_name: Option<String>,
    pub audio_encoding: String,
}

/// Model and prebuilt voice for streamed synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingVoice {
    pub model: String,
    pub voice_name: String,
}

/// Playable audio handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl SynthesizedAudio {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}
