use serde::{Deserialize, Serialize};

/// Recognition settings stored on the recognizer and sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub auto_decoding_config: AutoDetectDecodingConfig,
    pub language_codes: Vec<String>,
    pub model: String,
}

/// The provider infers encoding from container metadata when this is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoDetectDecodingConfig {}

impl RecognitionConfig {
    pub fn auto_decoding(language_code: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            auto_decoding_config: AutoDetectDecodingConfig::default(),
            language_codes: vec![language_code.into()],
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
}

impl RecognitionResult {
    pub fn from_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: transcripts
                .into_iter()
                .map(|t| RecognitionAlternative {
                    transcript: t.into(),
                })
                .collect(),
        }
    }

    pub fn top_transcript(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.transcript.as_str())
    }
}

/// Top alternatives of every result, in response order, joined by a space.
pub fn join_transcripts(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .filter_map(RecognitionResult::top_transcript)
        .collect::<Vec<_>>()
        .join(" ")
}
