//! Configuration (explicit keys > environment).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, RwLock};

use crate::types::ProviderKind;

/// Default directory for synthesized audio files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<CantoConfig> = OnceLock::new();

/// Configuration for Canto.
///
/// Credentials are held here and injected into provider constructors;
/// provider clients never read the process environment themselves.
#[derive(Debug, Clone)]
pub struct CantoConfig {
    api_keys: Arc<RwLock<HashMap<ProviderKind, String>>>,
    base_urls: Arc<RwLock<HashMap<ProviderKind, String>>>,
    output_dir: Arc<RwLock<PathBuf>>,
}

impl Default for CantoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CantoConfig {
    /// Create an empty config with the default output directory.
    pub fn new() -> Self {
        Self {
            api_keys: Arc::new(RwLock::new(HashMap::new())),
            base_urls: Arc::new(RwLock::new(HashMap::new())),
            output_dir: Arc::new(RwLock::new(PathBuf::from(DEFAULT_OUTPUT_DIR))),
        }
    }

    /// Load from environment variables (`OPENAI_API_KEY`, `MURF_API_KEY`,
    /// base-URL overrides, `CANTO_OUTPUT_DIR`). Honors a `.env` file.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        let key_mappings = [
            ("OPENAI_API_KEY", ProviderKind::OpenAi),
            ("MURF_API_KEY", ProviderKind::Murf),
        ];
        for (env_var, provider) in key_mappings {
            if let Ok(key) = std::env::var(env_var) {
                config.set_api_key(provider, key);
            }
        }

        let url_mappings = [
            ("OPENAI_BASE_URL", ProviderKind::OpenAi),
            ("MURF_BASE_URL", ProviderKind::Murf),
        ];
        for (env_var, provider) in url_mappings {
            if let Ok(url) = std::env::var(env_var) {
                config.set_base_url(provider, url);
            }
        }

        if let Ok(dir) = std::env::var("CANTO_OUTPUT_DIR") {
            config.set_output_dir(dir);
        }

        config
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static CantoConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn set_api_key(&self, provider: ProviderKind, key: String) {
        self.api_keys.write().unwrap().insert(provider, key);
    }

    pub fn get_api_key(&self, provider: ProviderKind) -> Option<String> {
        self.api_keys.read().unwrap().get(&provider).cloned()
    }

    pub fn set_base_url(&self, provider: ProviderKind, url: String) {
        self.base_urls.write().unwrap().insert(provider, url);
    }

    pub fn get_base_url(&self, provider: ProviderKind) -> Option<String> {
        self.base_urls.read().unwrap().get(&provider).cloned()
    }

    pub fn set_output_dir(&self, dir: impl Into<PathBuf>) {
        *self.output_dir.write().unwrap() = dir.into();
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.read().unwrap().clone()
    }

    /// Check whether a provider has a non-empty credential configured.
    pub fn has_credentials(&self, provider: ProviderKind) -> bool {
        self.get_api_key(provider)
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}
