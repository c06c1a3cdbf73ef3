//! Shared handler state.

use std::path::{Path, PathBuf};

use crate::config::SoundsConfig;
use crate::sound::{SoundLibrary, UploadFilter, DEFAULT_MAX_UPLOAD_SIZE};
use crate::Result;

/// Application state shared across handlers.
///
/// Holds no mutable data: the storage directory is the only shared resource.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage directory for clips.
    pub library: SoundLibrary,
    /// Document root with the HTML pages and client scripts.
    pub public_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
    /// Acceptance filter for uploaded files.
    pub filter: UploadFilter,
}

impl AppState {
    /// Create a new application state with the default upload limit.
    pub fn new(library: SoundLibrary, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            library,
            public_dir: public_dir.into(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            filter: UploadFilter,
        }
    }

    /// Build the state from configuration, creating the storage directory.
    pub fn from_config(config: &SoundsConfig) -> Result<Self> {
        let library = SoundLibrary::new(&config.storage_dir)?;
        Ok(Self::new(library, &config.public_dir).with_max_upload_size(config.max_upload_size_bytes))
    }

    /// Set the maximum upload size in bytes.
    pub fn with_max_upload_size(mut self, max_upload_size: u64) -> Self {
        self.max_upload_size = max_upload_size;
        self
    }

    /// Path of a document inside the public directory.
    pub fn public_file(&self, name: &str) -> PathBuf {
        self.public_dir.join(name)
    }

    /// Directory the clips are served from.
    pub fn storage_dir(&self) -> &Path {
        self.library.base_path()
    }
}
