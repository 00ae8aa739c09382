//! Shared HTTP client and header/status utilities.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::CantoError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Build Murf-style headers: the credential travels in both the `api-key`
/// and `token` headers.
pub fn murf_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(api_key) {
        headers.insert("api-key", val.clone());
        headers.insert("token", val);
    }
    headers
}

/// Map a non-success HTTP status to an error carrying the raw body.
pub fn status_to_error(status: u16, body: &str) -> CantoError {
    match status {
        401 | 403 => CantoError::Authentication(body.to_string()),
        _ => CantoError::api(status, body),
    }
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// MP3 payloads arrive as `audio/mpeg` (sometimes `audio/mp3`), possibly
/// with charset parameters appended.
pub fn content_type_is_mp3(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or_default();
    matches!(mime, "audio/mpeg" | "audio/mp3")
}
