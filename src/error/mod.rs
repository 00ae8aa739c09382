//! Error types for Canto.

use thiserror::Error;

/// Primary error type for all Canto operations.
#[derive(Error, Debug)]
pub enum CantoError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Provider error: {provider} — {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Broad error class shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected before any network call: blank input, out-of-range
    /// parameters, missing credential, empty voice catalog.
    Validation,
    /// The remote service failed: non-success status, malformed payload,
    /// missing response field, network trouble.
    Upstream,
    /// Writing the audio file failed.
    Io,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Upstream => "upstream",
            Self::Io => "io",
        }
    }
}

impl CantoError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a user-facing category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::Authentication(_) => ErrorCategory::Validation,
            Self::Io(_) => ErrorCategory::Io,
            _ => ErrorCategory::Upstream,
        }
    }

    /// Render a message naming the failure class. Upstream errors keep the
    /// raw status and body for diagnosis.
    pub fn user_message(&self) -> String {
        format!("{} error: {self}", self.category().label())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CantoError>;
