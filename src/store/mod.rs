//! Audio output store: synthesized bytes land in uniquely named MP3 files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CantoError;

/// Process-wide sequence so two saves in the same second still get
/// distinct names, even across store instances sharing a directory.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Writes synthesized audio under one output directory.
///
/// Files are named `speech_<unix-seconds>_<seq>.mp3`. Nothing is ever
/// evicted; directory growth is unbounded and cleanup is the caller's
/// concern.
#[derive(Debug)]
pub struct AudioOutputStore {
    dir: PathBuf,
}

impl AudioOutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist audio bytes and return the path of the finished file.
    ///
    /// The output directory is created if absent. Bytes go to a hidden
    /// `.part` file first and are renamed into place, so a reader opening
    /// the returned path always sees complete content.
    pub fn save(&self, audio: &[u8]) -> Result<PathBuf, CantoError> {
        fs::create_dir_all(&self.dir)?;

        let stamp = chrono::Utc::now().timestamp();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let file_name = format!("speech_{stamp}_{seq}.mp3");
        let path = self.dir.join(&file_name);
        let partial = self.dir.join(format!(".{file_name}.part"));

        fs::write(&partial, audio)?;
        fs::rename(&partial, &path)?;

        tracing::debug!(path = %path.display(), bytes = audio.len(), "Wrote audio file");
        Ok(path)
    }
}
