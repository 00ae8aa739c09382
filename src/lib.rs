//! Canto — provider-agnostic text-to-speech orchestration.
//!
//! Converts text into MP3 audio through one of two HTTP backends (OpenAI
//! or Murf), persisting the result to a local output directory. Credentials
//! are injected explicitly; provider selection is a tagged enum dispatched
//! through the [`provider::SpeechProvider`] trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use canto::prelude::*;
//!
//! # async fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = CantoConfig::from_env();
//! let orchestrator = ConversionOrchestrator::from_config(&config);
//!
//! let request = SpeechRequest::builder()
//!     .text("Hello world")
//!     .provider(ProviderKind::OpenAi)
//!     .voice_id("alloy")
//!     .build();
//!
//! let result = orchestrator.convert(&request).await?;
//! println!("saved {}", result.local_path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prelude;
pub mod provider;
pub mod store;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
