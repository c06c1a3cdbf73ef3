//! Storage directory for sound clips.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::Serialize;

use super::{is_allowed_extension, PUBLIC_SOUNDS_PATH};
use crate::{Result, SoundboardError};

/// A playable clip in the storage directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundFile {
    /// Filename including extension.
    pub name: String,
    /// Public URL the clip is served at.
    pub url: String,
}

impl SoundFile {
    /// Build the manifest entry for a stored filename.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let url = format!("{}/{}", PUBLIC_SOUNDS_PATH, urlencoding::encode(&name));
        Self { name, url }
    }
}

/// The directory of audio clips.
///
/// There is no index or sidecar metadata: the directory listing is the
/// whole data model. Files are created by uploads and never rewritten.
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    /// Directory holding the clips.
    base_path: PathBuf,
}

impl SoundLibrary {
    /// Open a library rooted at the given directory.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this library.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Full path for a stored filename.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if a file with this name exists in the directory.
    pub fn contains(&self, name: &str) -> bool {
        self.path_of(name).exists()
    }

    /// Take a fresh snapshot of the playable clips.
    ///
    /// Only regular files with an allowed extension are included, sorted by
    /// name with [`sort_names`].
    pub fn list(&self) -> Result<Vec<SoundFile>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_allowed_extension(&name) || !entry.path().is_file() {
                continue;
            }
            names.push(name);
        }

        sort_names(&mut names)?;
        Ok(names.into_iter().map(SoundFile::from_name).collect())
    }

    /// First unused filename in the sequence `slug.ext`, `slug-2.ext`, `slug-3.ext`, ...
    pub fn unique_filename(&self, slug: &str, ext: &str) -> String {
        let mut counter = 1;
        loop {
            let candidate = candidate_name(slug, ext, counter);
            if !self.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Persist an uploaded clip under a unique name derived from `slug`.
    ///
    /// Each candidate is created exclusively, so two concurrent uploads of the
    /// same title never write to the same file; the loser moves on to the next
    /// suffix. Returns the final filename.
    pub fn save(&self, slug: &str, ext: &str, content: &[u8]) -> Result<String> {
        let mut counter = 1;
        loop {
            let candidate = candidate_name(slug, ext, counter);
            let path = self.path_of(&candidate);

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    counter += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = file.write_all(content).and_then(|()| file.sync_all()) {
                drop(file);
                let _ = fs::remove_file(&path);
                return Err(e.into());
            }

            return Ok(candidate);
        }
    }

    /// [`SoundLibrary::list`] on the blocking thread pool.
    pub async fn list_async(&self) -> Result<Vec<SoundFile>> {
        let library = self.clone();
        tokio::task::spawn_blocking(move || library.list())
            .await
            .map_err(|e| SoundboardError::Io(io::Error::other(e)))?
    }

    /// [`SoundLibrary::save`] on the blocking thread pool.
    pub async fn save_async(&self, slug: String, ext: String, content: Vec<u8>) -> Result<String> {
        let library = self.clone();
        tokio::task::spawn_blocking(move || library.save(&slug, &ext, &content))
            .await
            .map_err(|e| SoundboardError::Io(io::Error::other(e)))?
    }
}

fn candidate_name(slug: &str, ext: &str, counter: u32) -> String {
    if counter <= 1 {
        format!("{slug}{ext}")
    } else {
        format!("{slug}-{counter}{ext}")
    }
}

/// Collator for clip names: root locale, tertiary strength.
///
/// Punctuation stays significant, so `a_b` sorts before `a1` and accented
/// letters sort next to their base letter.
pub fn name_collator() -> Result<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    Collator::try_new(&Default::default(), options)
        .map_err(|e| SoundboardError::Collation(e.to_string()))
}

/// Sort filenames in locale-aware order.
pub fn sort_names(names: &mut [String]) -> Result<()> {
    let collator = name_collator()?;
    names.sort_by(|a, b| collator.compare(a, b));
    Ok(())
}
