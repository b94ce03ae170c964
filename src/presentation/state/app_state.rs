use std::sync::Arc;

use crate::application::services::{SynthesisService, TranscriptionService};

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub synthesis_service: Arc<SynthesisService>,
}
