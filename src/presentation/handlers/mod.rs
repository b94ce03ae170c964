mod api_error;
mod health;
mod synthesize;
mod transcribe;

pub use api_error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use synthesize::{SynthesizeRequest, stream_synthesize_handler, synthesize_handler};
pub use transcribe::{TranscribeResponse, transcribe_handler};
