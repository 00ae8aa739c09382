//! Request, voice, and result types shared across providers.

use std::path::PathBuf;

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Unique identifier for one conversion attempt.
pub type ConversionId = Uuid;

/// Inclusive bound for the `rate` and `pitch` request parameters.
pub const SPEECH_PARAM_RANGE: std::ops::RangeInclusive<i32> = -50..=50;

/// Which speech backend to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Murf,
}

/// A single text-to-speech request.
///
/// `rate` and `pitch` are percentage offsets in [-50, 50]; both default to 0.
/// Only the Murf backend honors `style`, `rate`, and `pitch`.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[builder(into)]
    pub text: String,
    pub provider: ProviderKind,
    #[builder(into)]
    pub voice_id: String,
    #[builder(into)]
    pub style: Option<String>,
    #[builder(default)]
    pub rate: i32,
    #[builder(default)]
    pub pitch: i32,
}

/// Metadata for one synthesizable voice, as returned by a catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDescriptor {
    pub voice_id: String,
    pub display_name: String,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub available_styles: Vec<String>,
}

/// An immutable snapshot of one voice catalog fetch.
#[derive(Debug, Clone, Default)]
pub struct VoiceInventory {
    voices: Vec<VoiceDescriptor>,
}

impl VoiceInventory {
    pub fn new(voices: Vec<VoiceDescriptor>) -> Self {
        Self { voices }
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn voices(&self) -> &[VoiceDescriptor] {
        &self.voices
    }

    pub fn find(&self, voice_id: &str) -> Option<&VoiceDescriptor> {
        self.voices.iter().find(|voice| voice.voice_id == voice_id)
    }

    /// Delivery styles supported by a voice. Unknown voices yield an empty
    /// slice; no style is ever forced on the caller.
    pub fn styles_for(&self, voice_id: &str) -> &[String] {
        self.find(voice_id)
            .map(|voice| voice.available_styles.as_slice())
            .unwrap_or(&[])
    }
}

/// What a provider returns on success: raw audio bytes, plus the remote
/// URL when the backend serves audio through one (Murf).
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    pub audio: Vec<u8>,
    pub remote_url: Option<String>,
}

/// The outcome of a completed conversion, handed to the caller for
/// playback or download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub id: ConversionId,
    pub local_path: PathBuf,
    pub remote_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(voice_id: &str, styles: &[&str]) -> VoiceDescriptor {
        VoiceDescriptor {
            voice_id: voice_id.to_string(),
            display_name: "Natalie".to_string(),
            accent: "US".to_string(),
            gender: "Female".to_string(),
            available_styles: styles.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn request_builder_defaults_rate_and_pitch_to_zero() {
        let request = SpeechRequest::builder()
            .text("hello")
            .provider(ProviderKind::OpenAi)
            .voice_id("alloy")
            .build();

        assert_eq!(request.rate, 0);
        assert_eq!(request.pitch, 0);
        assert!(request.style.is_none());
    }

    #[test]
    fn provider_kind_round_trips_through_strings() {
        assert_eq!("murf".parse::<ProviderKind>().unwrap(), ProviderKind::Murf);
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::Murf.to_string(), "murf");
        assert!("espeak".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn inventory_styles_lookup_by_voice_id() {
        let inventory = VoiceInventory::new(vec![
            descriptor("en-US-natalie", &["Conversational", "Promo"]),
            descriptor("en-US-ken", &[]),
        ]);

        assert_eq!(
            inventory.styles_for("en-US-natalie"),
            &["Conversational".to_string(), "Promo".to_string()]
        );
        assert!(inventory.styles_for("en-US-ken").is_empty());
        assert!(inventory.styles_for("unknown-voice").is_empty());
    }

    #[test]
    fn voice_descriptor_parses_catalog_wire_shape() {
        let json = r#"{
            "voiceId": "en-UK-hazel",
            "displayName": "Hazel",
            "accent": "UK",
            "gender": "Female",
            "availableStyles": ["Conversational"]
        }"#;

        let voice: VoiceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(voice.voice_id, "en-UK-hazel");
        assert_eq!(voice.available_styles, vec!["Conversational".to_string()]);
    }

    #[test]
    fn voice_descriptor_tolerates_missing_optional_fields() {
        let json = r#"{"voiceId": "v1", "displayName": "V One"}"#;

        let voice: VoiceDescriptor = serde_json::from_str(json).unwrap();
        assert!(voice.accent.is_empty());
        assert!(voice.available_styles.is_empty());
    }
}
