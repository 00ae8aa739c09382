//! OpenAI speech synthesis provider (`/audio/speech`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::http::{
    bearer_headers, content_type_is_mp3, shared_client, status_to_error, trim_trailing_slash,
};
use super::SpeechProvider;
use crate::error::CantoError;
use crate::types::{SpeechOutput, SpeechRequest, SPEECH_PARAM_RANGE};
use crate::util::timeout::with_timeout;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TTS_MODEL: &str = "tts-1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI TTS provider. The synthesis endpoint returns raw MP3 bytes in the
/// response body.
#[derive(Debug, Clone)]
pub struct OpenAiTtsProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiTtsProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_TTS_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model: DEFAULT_TTS_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
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
}

#[async_trait]
impl SpeechProvider for OpenAiTtsProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn check_credentials(&self) -> Result<(), CantoError> {
        if self.api_key.trim().is_empty() {
            return Err(CantoError::Authentication(
                "Missing OpenAI API key for speech generation".to_string(),
            ));
        }
        Ok(())
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechOutput, CantoError> {
        self.validate_request(request)?;

        let payload = serde_json::json!({
            "model": self.model.clone(),
            "input": request.text.clone(),
            "voice": request.voice_id.clone(),
            "response_format": "mp3",
        });

        let url = format!("{}/audio/speech", trim_trailing_slash(&self.base_url));
        let headers = bearer_headers(&self.api_key);

        tracing::debug!(voice = %request.voice_id, text_len = request.text.len(), "OpenAI TTS request");

        with_timeout(self.timeout, async {
            let response = shared_client()
                .post(url)
                .headers(headers)
                .json(&payload)
                .send()
                .await?;

            parse_speech_response(response).await
        })
        .await
    }
}

async fn parse_speech_response(response: reqwest::Response) -> Result<SpeechOutput, CantoError> {
    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        return Err(status_to_error(status, &body));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        let body = response.text().await.unwrap_or_default();
        if let Some(message) = extract_error_message(&body) {
            return Err(CantoError::Provider {
                provider: "openai".to_string(),
                message,
            });
        }
        return Err(CantoError::InvalidState(
            "Expected audio payload, got JSON response".to_string(),
        ));
    }

    if !content_type_is_mp3(&content_type) {
        return Err(CantoError::InvalidState(format!(
            "Unexpected speech response MIME type '{content_type}'"
        )));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(CantoError::InvalidState(
            "Speech response contained empty audio payload".to_string(),
        ));
    }

    Ok(SpeechOutput {
        audio: bytes.to_vec(),
        remote_url: None,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .map(ToString::to_string)
}
