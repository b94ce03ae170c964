mod audio_chunk;
mod audio_chunk_aggregator;
mod audio_mime_descriptor;
mod container_format;
mod recognition;
mod recognizer_path;
mod synthesis;
mod wav_file;

pub use audio_chunk::AudioChunk;
pub use audio_chunk_aggregator::{AggregatedAudio, AudioChunkAggregator};
pub use audio_mime_descriptor::{AudioMimeDescriptor, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE};
pub use container_format::container_extension;
pub use recognition::{
    AutoDetectDecodingConfig, RecognitionAlternative, RecognitionConfig, RecognitionResult,
    join_transcripts,
};
pub use recognizer_path::RecognizerPath;
pub use synthesis::{
    MP3_MIME_TYPE, StreamingVoice, SynthesisVoice, SynthesizedAudio, WAV_MIME_TYPE,
};
pub use wav_file::{WAV_HEADER_LEN, WavFile};
