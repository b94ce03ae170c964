use crate::application::ports::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),
    #[error("no audio produced")]
    NoAudioProduced,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
