mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CredentialsSettings, GoogleSettings, LoggingSettings, ProviderKind, ProviderSettings,
    ServerSettings, Settings,
};
