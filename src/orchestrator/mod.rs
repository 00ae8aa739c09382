//! Conversion orchestrator: validate, synthesize, store.

use strum::Display;
use thiserror::Error;
use uuid::Uuid;

use crate::config::CantoConfig;
use crate::error::CantoError;
use crate::provider::{
    MurfTtsProvider, OpenAiTtsProvider, SpeechProvider, VoiceCatalog,
};
use crate::store::AudioOutputStore;
use crate::types::{ProviderKind, SpeechRequest, SynthesisResult, VoiceInventory, SPEECH_PARAM_RANGE};

/// Phase of a conversion attempt.
///
/// A successful attempt walks `Idle → Validating → Synthesizing → Storing
/// → Done`; a failure in `Validating`, `Synthesizing`, or `Storing` ends
/// the attempt. There are no retries — the caller must resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConversionPhase {
    Idle,
    Validating,
    Synthesizing,
    Storing,
    Done,
    Failed,
}

/// A failed conversion, recording the phase the attempt died in.
#[derive(Debug, Error)]
#[error("conversion failed during {phase}: {source}")]
pub struct ConversionError {
    pub phase: ConversionPhase,
    #[source]
    pub source: CantoError,
}

impl ConversionError {
    /// User-facing rendering: failure class plus the phase it occurred in.
    pub fn user_message(&self) -> String {
        format!("{} (during {})", self.source.user_message(), self.phase)
    }
}

/// Drives one synthesis request through validation, the selected provider,
/// and the output store.
pub struct ConversionOrchestrator {
    openai: OpenAiTtsProvider,
    murf: MurfTtsProvider,
    store: AudioOutputStore,
}

impl ConversionOrchestrator {
    pub fn new(
        openai: OpenAiTtsProvider,
        murf: MurfTtsProvider,
        store: AudioOutputStore,
    ) -> Self {
        Self {
            openai,
            murf,
            store,
        }
    }

    /// Build an orchestrator from configured credentials, base-URL
    /// overrides, and output directory. Absent credentials become empty
    /// keys that fail validation with a user-visible message.
    pub fn from_config(config: &CantoConfig) -> Self {
        let openai_key = config.get_api_key(ProviderKind::OpenAi).unwrap_or_default();
        let openai = match config.get_base_url(ProviderKind::OpenAi) {
            Some(url) => OpenAiTtsProvider::new_with_base_url(openai_key, url),
            None => OpenAiTtsProvider::new(openai_key),
        };

        let murf_key = config.get_api_key(ProviderKind::Murf).unwrap_or_default();
        let murf = match config.get_base_url(ProviderKind::Murf) {
            Some(url) => MurfTtsProvider::new_with_base_url(murf_key, url),
            None => MurfTtsProvider::new(murf_key),
        };

        Self::new(openai, murf, AudioOutputStore::new(config.output_dir()))
    }

    /// Run one conversion to completion or first failure.
    pub async fn convert(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesisResult, ConversionError> {
        let id = Uuid::new_v4();
        tracing::debug!(conversion = %id, provider = %request.provider, "Conversion submitted");

        self.validate(request)
            .await
            .map_err(|source| self.fail(id, ConversionPhase::Validating, source))?;

        tracing::debug!(conversion = %id, "Synthesizing");
        let output = self
            .provider_for(request.provider)
            .synthesize(request)
            .await
            .map_err(|source| self.fail(id, ConversionPhase::Synthesizing, source))?;

        tracing::debug!(conversion = %id, bytes = output.audio.len(), "Storing");
        let local_path = self
            .store
            .save(&output.audio)
            .map_err(|source| self.fail(id, ConversionPhase::Storing, source))?;

        tracing::debug!(conversion = %id, path = %local_path.display(), "Done");
        Ok(SynthesisResult {
            id,
            local_path,
            remote_url: output.remote_url,
        })
    }

    /// The Murf voice inventory, for voice and style pickers.
    pub async fn voices(&self) -> Result<VoiceInventory, CantoError> {
        self.murf.fetch_inventory().await
    }

    fn provider_for(&self, kind: ProviderKind) -> &dyn SpeechProvider {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Murf => &self.murf,
        }
    }

    /// Validation gate. Blank text short-circuits before any credential or
    /// network check; the Murf path additionally requires a non-empty voice
    /// catalog.
    async fn validate(&self, request: &SpeechRequest) -> Result<(), CantoError> {
        if request.text.trim().is_empty() {
            return Err(CantoError::Validation(
                "Text must not be blank".to_string(),
            ));
        }
        if !SPEECH_PARAM_RANGE.contains(&request.rate) {
            return Err(CantoError::Validation(format!(
                "Rate {} is outside [-50, 50]",
                request.rate
            )));
        }
        if !SPEECH_PARAM_RANGE.contains(&request.pitch) {
            return Err(CantoError::Validation(format!(
                "Pitch {} is outside [-50, 50]",
                request.pitch
            )));
        }

        self.provider_for(request.provider).check_credentials()?;

        if request.provider == ProviderKind::Murf {
            let inventory = self.murf.fetch_inventory().await?;
            if inventory.is_empty() {
                return Err(CantoError::Validation(
                    "Murf voice catalog is empty; provider unavailable".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn fail(
        &self,
        id: Uuid,
        phase: ConversionPhase,
        source: CantoError,
    ) -> ConversionError {
        tracing::warn!(conversion = %id, phase = %phase, error = %source, "Conversion failed");
        ConversionError { phase, source }
    }
}
