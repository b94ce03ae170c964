mod google_speech_client;
mod mock_recognition_provider;

pub use google_speech_client::{DEFAULT_SPEECH_BASE_URL, GoogleSpeechClient};
pub use mock_recognition_provider::MockRecognitionProvider;
