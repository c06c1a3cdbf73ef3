//! Request/response DTOs for the Web API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::sound::SoundFile;

/// Confirmation message returned for a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "...thanks for the input...";

/// Manifest of playable clips.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SoundListResponse {
    /// Clips sorted by name.
    pub sounds: Vec<SoundEntry>,
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SoundEntry {
    /// Filename including extension.
    pub name: String,
    /// URL the clip is served at.
    pub url: String,
}

impl From<SoundFile> for SoundEntry {
    fn from(sound: SoundFile) -> Self {
        Self {
            name: sound.name,
            url: sound.url,
        }
    }
}

/// Successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Always `true`.
    pub ok: bool,
    /// Final stored filename.
    pub filename: String,
    /// Confirmation message.
    pub message: String,
}

impl UploadResponse {
    /// Create the response for a stored file.
    pub fn stored(filename: impl Into<String>) -> Self {
        Self {
            ok: true,
            filename: filename.into(),
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Multipart form accepted by the upload endpoint.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// Title the stored filename is derived from.
    pub title: String,
    /// MP3 or M4A payload.
    #[schema(value_type = String, format = Binary)]
    pub audio: Vec<u8>,
}
