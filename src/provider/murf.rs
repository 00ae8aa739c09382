//! Murf speech synthesis provider and voice catalog.
//!
//! Synthesis is two-step: a POST to `/v1/speech/generate` answers with a
//! JSON envelope holding a remote audio URL, and a second GET downloads the
//! actual bytes. The catalog is one authenticated GET to
//! `/v1/speech/voices`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http::{murf_headers, shared_client, status_to_error, trim_trailing_slash};
use super::{SpeechProvider, VoiceCatalog};
use crate::error::CantoError;
use crate::types::{SpeechOutput, SpeechRequest, VoiceDescriptor, SPEECH_PARAM_RANGE};
use crate::util::timeout::with_timeout;

const DEFAULT_BASE_URL: &str = "https://api.murf.ai";
const MODEL_VERSION: &str = "GEN2";
const SAMPLE_RATE: u32 = 24_000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Murf TTS provider. Honors per-request style, rate, and pitch; always
/// requests mono MP3 at a fixed sample rate, never base64.
#[derive(Debug, Clone)]
pub struct MurfTtsProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MurfSpeechBody<'a> {
    voice_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
    text: &'a str,
    rate: i32,
    pitch: i32,
    format: &'a str,
    channel_type: &'a str,
    model_version: &'a str,
    sample_rate: u32,
    encode_as_base64: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MurfSpeechResponse {
    audio_file: Option<String>,
}

impl MurfTtsProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn validate_request(&self, request: &SpeechRequest) -> Result<(), CantoError> {
        self.check_credentials()?;
        if request.text.trim().is_empty() {
            return Err(CantoError::Validation(
                "Speech text cannot be blank".to_string(),
            ));
        }
        if request.voice_id.trim().is_empty() {
            return Err(CantoError::Validation(
                "Voice id cannot be empty".to_string(),
            ));
        }
        if !SPEECH_PARAM_RANGE.contains(&request.rate)
            || !SPEECH_PARAM_RANGE.contains(&request.pitch)
        {
            return Err(CantoError::Validation(
                "Rate and pitch must be between -50 and 50".to_string(),
            ));
        }
        Ok(())
    }

    async fn generate_once(&self, request: &SpeechRequest) -> Result<SpeechOutput, CantoError> {
        let body = MurfSpeechBody {
            voice_id: &request.voice_id,
            style: request.style.as_deref(),
            text: &request.text,
            rate: request.rate,
            pitch: request.pitch,
            format: "MP3",
            channel_type: "MONO",
            model_version: MODEL_VERSION,
            sample_rate: SAMPLE_RATE,
            encode_as_base64: false,
        };

        let url = format!(
            "{}/v1/speech/generate",
            trim_trailing_slash(&self.base_url)
        );

        tracing::debug!(
            voice_id = %request.voice_id,
            style = ?request.style,
            text_len = request.text.len(),
            "Sending Murf TTS request"
        );

        let response = shared_client()
            .post(url)
            .headers(murf_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body));
        }

        let body = response.text().await?;
        let parsed: MurfSpeechResponse = serde_json::from_str(&body)?;
        let audio_url = match parsed.audio_file {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                return Err(CantoError::InvalidState(
                    "Murf synthesis response missing 'audioFile' field".to_string(),
                ))
            }
        };

        let audio = self.download_audio(&audio_url).await?;

        tracing::debug!(audio_size = audio.len(), "Received Murf audio");

        Ok(SpeechOutput {
            audio,
            remote_url: Some(audio_url),
        })
    }

    async fn download_audio(&self, url: &str) -> Result<Vec<u8>, CantoError> {
        let response = shared_client().get(url).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(CantoError::InvalidState(
                "Downloaded audio payload was empty".to_string(),
            ));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechProvider for MurfTtsProvider {
    fn name(&self) -> &'static str {
        "murf"
    }

    fn check_credentials(&self) -> Result<(), CantoError> {
        if self.api_key.trim().is_empty() {
            return Err(CantoError::Authentication(
                "Missing Murf API key for speech generation".to_string(),
            ));
        }
        Ok(())
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechOutput, CantoError> {
        self.validate_request(request)?;
        with_timeout(self.timeout, self.generate_once(request)).await
    }
}

#[async_trait]
impl VoiceCatalog for MurfTtsProvider {
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, CantoError> {
        self.check_credentials()?;

        let url = format!("{}/v1/speech/voices", trim_trailing_slash(&self.base_url));

        let voices: Vec<VoiceDescriptor> = with_timeout(self.timeout, async {
            let response = shared_client()
                .get(url)
                .headers(murf_headers(&self.api_key))
                .send()
                .await?;

            let status = response.status().as_u16();
            if status != 200 {
                let body = response.text().await.unwrap_or_default();
                return Err(status_to_error(status, &body));
            }

            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        })
        .await?;

        tracing::debug!(count = voices.len(), "Fetched Murf voice catalog");
        Ok(voices)
    }
}
