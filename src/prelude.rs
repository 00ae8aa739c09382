//! Convenience re-exports for common use.

pub use crate::config::CantoConfig;
pub use crate::error::{CantoError, ErrorCategory, Result};
pub use crate::orchestrator::{ConversionError, ConversionOrchestrator, ConversionPhase};
pub use crate::provider::{MurfTtsProvider, OpenAiTtsProvider, SpeechProvider, VoiceCatalog};
pub use crate::store::AudioOutputStore;
pub use crate::types::{
    ProviderKind, SpeechOutput, SpeechRequest, SynthesisResult, VoiceDescriptor, VoiceInventory,
};
