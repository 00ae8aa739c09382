use canto::error::{CantoError, ErrorCategory};
use canto::orchestrator::{ConversionOrchestrator, ConversionPhase};
use canto::provider::{MurfTtsProvider, OpenAiTtsProvider};
use canto::store::AudioOutputStore;
use canto::types::{ProviderKind, SpeechRequest};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orchestrator(server: &MockServer, dir: &TempDir) -> ConversionOrchestrator {
    ConversionOrchestrator::new(
        OpenAiTtsProvider::new_with_base_url("openai-key".to_string(), server.uri()),
        MurfTtsProvider::new_with_base_url("murf-key".to_string(), server.uri()),
        AudioOutputStore::new(dir.path()),
    )
}

fn openai_request(text: &str) -> SpeechRequest {
    SpeechRequest::builder()
        .text(text)
        .provider(ProviderKind::OpenAi)
        .voice_id("alloy")
        .build()
}

fn murf_request() -> SpeechRequest {
    SpeechRequest::builder()
        .text("Good morning")
        .provider(ProviderKind::Murf)
        .voice_id("en-US-natalie")
        .style("Conversational")
        .build()
}

async fn mount_catalog(server: &MockServer, voices: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/speech/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voices))
        .mount(server)
        .await;
}

#[tokio::test]
async fn openai_happy_path_saves_playable_mp3() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let audio = b"ID3 fake mp3 payload".to_vec();
    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(audio.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = orchestrator(&server, &dir)
        .convert(&openai_request("Hello world"))
        .await
        .expect("conversion should succeed");

    assert!(result.local_path.exists());
    assert_eq!(result.local_path.extension().unwrap(), "mp3");
    assert!(result.remote_url.is_none());

    let saved = std::fs::read(&result.local_path).unwrap();
    assert!(!saved.is_empty());
    assert_eq!(saved, audio);
}

#[tokio::test]
async fn murf_happy_path_keeps_remote_url() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_catalog(
        &server,
        json!([{
            "voiceId": "en-US-natalie",
            "displayName": "Natalie",
            "accent": "US",
            "gender": "Female",
            "availableStyles": ["Conversational"]
        }]),
    )
    .await;

    let audio_url = format!("{}/generated/clip.mp3", server.uri());
    Mock::given(method("POST"))
        .and(path("/v1/speech/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"audioFile": audio_url})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/generated/clip.mp3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(vec![5_u8, 6, 7]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = orchestrator(&server, &dir)
        .convert(&murf_request())
        .await
        .expect("conversion should succeed");

    assert_eq!(result.remote_url.as_deref(), Some(audio_url.as_str()));
    assert_eq!(std::fs::read(&result.local_path).unwrap(), vec![5, 6, 7]);
}

#[tokio::test]
async fn blank_text_fails_validation_without_any_network_call() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = orchestrator(&server, &dir)
        .convert(&openai_request("   \n\t  "))
        .await
        .expect_err("blank text should fail");

    assert_eq!(err.phase, ConversionPhase::Validating);
    assert_eq!(err.source.category(), ErrorCategory::Validation);
}

#[tokio::test]
async fn out_of_range_pitch_fails_validation() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let mut request = openai_request("Hello");
    request.pitch = -80;

    let err = orchestrator(&server, &dir)
        .convert(&request)
        .await
        .expect_err("out-of-range pitch should fail");

    assert_eq!(err.phase, ConversionPhase::Validating);
    assert!(matches!(err.source, CantoError::Validation(ref m) if m.contains("Pitch")));
}

#[tokio::test]
async fn missing_credential_fails_validation() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let orchestrator = ConversionOrchestrator::new(
        OpenAiTtsProvider::new_with_base_url(String::new(), server.uri()),
        MurfTtsProvider::new_with_base_url("murf-key".to_string(), server.uri()),
        AudioOutputStore::new(dir.path()),
    );

    let err = orchestrator
        .convert(&openai_request("Hello"))
        .await
        .expect_err("missing credential should fail");

    assert_eq!(err.phase, ConversionPhase::Validating);
    assert_eq!(err.source.category(), ErrorCategory::Validation);
    assert!(matches!(err.source, CantoError::Authentication(_)));
}

#[tokio::test]
async fn empty_murf_catalog_blocks_synthesis() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_catalog(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/v1/speech/generate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = orchestrator(&server, &dir)
        .convert(&murf_request())
        .await
        .expect_err("empty catalog should fail");

    assert_eq!(err.phase, ConversionPhase::Validating);
    assert!(matches!(err.source, CantoError::Validation(ref m) if m.contains("catalog")));
}

#[tokio::test]
async fn catalog_outage_fails_validation_as_upstream() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/speech/voices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = orchestrator(&server, &dir)
        .convert(&murf_request())
        .await
        .expect_err("catalog outage should fail");

    assert_eq!(err.phase, ConversionPhase::Validating);
    assert_eq!(err.source.category(), ErrorCategory::Upstream);
}

#[tokio::test]
async fn murf_response_without_audio_file_fails_synthesis() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_catalog(
        &server,
        json!([{
            "voiceId": "en-US-natalie",
            "displayName": "Natalie"
        }]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/v1/speech/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"audioLength": 1.5})))
        .expect(1)
        .mount(&server)
        .await;

    let err = orchestrator(&server, &dir)
        .convert(&murf_request())
        .await
        .expect_err("missing audioFile should fail");

    assert_eq!(err.phase, ConversionPhase::Synthesizing);
    assert_eq!(err.source.category(), ErrorCategory::Upstream);
    assert!(err.user_message().contains("audioFile"));
}

#[tokio::test]
async fn provider_failure_surfaces_status_in_user_message() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = orchestrator(&server, &dir)
        .convert(&openai_request("Hello"))
        .await
        .expect_err("upstream failure should fail");

    assert_eq!(err.phase, ConversionPhase::Synthesizing);
    let message = err.user_message();
    assert!(message.contains("upstream error"));
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn voices_exposes_the_murf_inventory() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_catalog(
        &server,
        json!([{
            "voiceId": "en-US-natalie",
            "displayName": "Natalie",
            "availableStyles": ["Promo"]
        }]),
    )
    .await;

    let inventory = orchestrator(&server, &dir)
        .voices()
        .await
        .expect("inventory fetch should succeed");

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.styles_for("en-US-natalie"), &["Promo".to_string()]);
}
