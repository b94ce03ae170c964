use std::path::PathBuf;

use config::{Config, ConfigError, File, Map};
use serde::Deserialize;

use crate::domain::{RecognitionConfig, RecognizerPath, StreamingVoice, SynthesisVoice};
use crate::infrastructure::recognition::DEFAULT_SPEECH_BASE_URL;
use crate::infrastructure::synthesis::{DEFAULT_STREAMING_BASE_URL, DEFAULT_TTS_BASE_URL};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    #[serde(default)]
    pub credentials: CredentialsSettings,
    pub logging: LoggingSettings,
    pub provider: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    pub project_id: String,
    pub location: String,
    pub recognizer_id: String,
    pub language_code: String,
    pub recognition_model: String,
    pub speech_base_url: String,
    pub tts_base_url: String,
    pub tts_voice_name: Option<String>,
    pub tts_audio_encoding: String,
    pub streaming_base_url: String,
    pub streaming_model: String,
    pub streaming_voice_name: String,
}

impl GoogleSettings {
    pub fn recognizer_path(&self) -> RecognizerPath {
        RecognizerPath::new(&self.project_id, &self.location, &self.recognizer_id)
    }

    pub fn recognition_config(&self) -> RecognitionConfig {
        RecognitionConfig::auto_decoding(&self.language_code, &self.recognition_model)
    }

    pub fn synthesis_voice(&self) -> SynthesisVoice {
        SynthesisVoice {
            language_code: self.language_code.clone(),
            voice_name: self.tts_voice_name.clone(),
            audio_encoding: self.tts_audio_encoding.clone(),
        }
    }

    pub fn streaming_voice(&self) -> StreamingVoice {
        StreamingVoice {
            model: self.streaming_model.clone(),
            voice_name: self.streaming_voice_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsSettings {
    pub access_token: Option<String>,
    pub token_file: Option<PathBuf>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Mock,
}

impl Settings {
    /// Defaults, then `config/base.toml`, then `config/{environment}.toml`, then
    /// `APP_`-prefixed variables with `__` between sections. `PORT` wins over all.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, std::env::vars().collect())
    }

    /// Same layering as [`Settings::load`], reading variables from `vars`
    /// instead of the process environment.
    pub fn load_from(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let port = vars.get("PORT").and_then(|p| p.trim().parse::<u16>().ok());

        let mut builder = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars)),
            );

        if let Some(port) = port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("google.project_id", "")?
            .set_default("google.location", "global")?
            .set_default("google.recognizer_id", "sinhala-recognizer")?
            .set_default("google.language_code", "si-LK")?
            .set_default("google.recognition_model", "short")?
            .set_default("google.speech_base_url", DEFAULT_SPEECH_BASE_URL)?
            .set_default("google.tts_base_url", DEFAULT_TTS_BASE_URL)?
            .set_default("google.tts_audio_encoding", "MP3")?
            .set_default("google.streaming_base_url", DEFAULT_STREAMING_BASE_URL)?
            .set_default("google.streaming_model", "gemini-2.5-flash-preview-tts")?
            .set_default("google.streaming_voice_name", "Kore")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("provider.kind", "google")
    }
}
