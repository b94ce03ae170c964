mod provider_error;
mod recognition_provider;
mod synthesis_provider;

pub use provider_error::ProviderError;
pub use recognition_provider::RecognitionProvider;
pub use synthesis_provider::{AudioChunkStream, StreamingSynthesisProvider, SynthesisProvider};
