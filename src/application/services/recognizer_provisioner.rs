use std::sync::Arc;

use crate::application::ports::RecognitionProvider;
use crate::domain::{RecognitionConfig, RecognizerPath};

/// How a recognizer came to be usable. Informational only: every outcome
/// lets the caller proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    /// The recognizer was already there.
    Ready,
    /// This call created it.
    Created,
    /// Creation failed, most likely because a concurrent caller won the race.
    Contended,
}

pub struct RecognizerProvisioner {
    provider: Arc<dyn RecognitionProvider>,
}

impl RecognizerProvisioner {
    pub fn new(provider: Arc<dyn RecognitionProvider>) -> Self {
        Self { provider }
    }

    /// Fetches the recognizer and creates it when the fetch fails for any reason.
    ///
    /// Creation errors are swallowed; a recognizer that is genuinely unavailable
    /// surfaces on the recognition call that follows.
    #[tracing::instrument(skip(self, default_config), fields(recognizer = %path))]
    pub async fn ensure_recognizer(
        &self,
        path: &RecognizerPath,
        default_config: &RecognitionConfig,
    ) -> ProvisioningOutcome {
        let fetch_error = match self.provider.fetch_recognizer(path).await {
            Ok(()) => {
                tracing::debug!("Recognizer exists");
                return ProvisioningOutcome::Ready;
            }
            Err(e) => e,
        };

        tracing::warn!(error = %fetch_error, "Recognizer lookup failed, creating it");

        match self
            .provider
            .create_recognizer(path.parent(), path.recognizer_id(), default_config)
            .await
        {
            Ok(()) => {
                tracing::info!(recognizer_id = path.recognizer_id(), "Recognizer created");
                ProvisioningOutcome::Created
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recognizer creation failed, proceeding anyway");
                ProvisioningOutcome::Contended
            }
        }
    }
}
