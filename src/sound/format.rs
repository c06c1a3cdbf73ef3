//! Allowed audio formats and the upload acceptance filter.

use std::path::Path;

use super::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES};
use crate::{Result, SoundboardError};

/// Extract the lower-cased extension of a filename, including the leading dot.
///
/// Returns `None` when the name has no extension (".hidden" has none).
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Check whether a filename carries an allowed extension (case-insensitive).
pub fn is_allowed_extension(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check whether a declared MIME type is allowed.
pub fn is_allowed_mime(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

/// Acceptance filter applied to an uploaded file before any bytes are read.
///
/// Both the extension of the client supplied filename and the declared
/// MIME type must be in the allowed sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadFilter;

impl UploadFilter {
    /// Check an incoming file part.
    ///
    /// Returns the normalized extension on success.
    pub fn check(&self, original_name: &str, mime: Option<&str>) -> Result<String> {
        let ext = extension_of(original_name)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or(SoundboardError::UnsupportedFormat)?;

        if !mime.is_some_and(is_allowed_mime) {
            return Err(SoundboardError::UnsupportedFormat);
        }

        Ok(ext)
    }
}
