mod gemini_streaming_client;
mod google_text_to_speech_client;
mod mock_synthesis_provider;
mod sse_buffer;

pub use gemini_streaming_client::{DEFAULT_STREAMING_BASE_URL, GeminiStreamingClient, parse_event};
pub use google_text_to_speech_client::{
    DEFAULT_TTS_BASE_URL, GoogleTextToSpeechClient, mime_for_encoding,
};
pub use mock_synthesis_provider::MockSynthesisProvider;
pub use sse_buffer::SseBuffer;
