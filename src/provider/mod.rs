//! Speech provider capability and its implementations.

pub mod http;
pub mod murf;
pub mod openai;

pub use murf::MurfTtsProvider;
pub use openai::OpenAiTtsProvider;

use async_trait::async_trait;

use crate::error::CantoError;
use crate::types::{SpeechOutput, SpeechRequest, VoiceDescriptor, VoiceInventory};

/// Trait for text-to-speech providers.
///
/// On success `synthesize` returns non-empty audio bytes; every failure is
/// an `Err` the caller can inspect and render. Implementations make exactly
/// one attempt per call.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fail fast when no credential is configured.
    fn check_credentials(&self) -> Result<(), CantoError>;

    /// Convert text to audio bytes.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechOutput, CantoError>;
}

/// Trait for providers that expose a dynamic voice catalog.
#[async_trait]
pub trait VoiceCatalog: Send + Sync {
    /// Fetch the available voices in one authenticated request.
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, CantoError>;

    /// Fetch and wrap the catalog for style/voice lookups.
    async fn fetch_inventory(&self) -> Result<VoiceInventory, CantoError> {
        Ok(VoiceInventory::new(self.list_voices().await?))
    }
}
