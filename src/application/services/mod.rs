mod recognizer_provisioner;
mod synthesis_service;
mod transcription_service;
mod voice_error;

pub use recognizer_provisioner::{ProvisioningOutcome, RecognizerProvisioner};
pub use synthesis_service::{SynthesisService, into_playable};
pub use transcription_service::TranscriptionService;
pub use voice_error::VoiceError;
