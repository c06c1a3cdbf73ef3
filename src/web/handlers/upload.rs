//! Upload handler.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::sound::{extension_of, is_allowed_extension, slugify_title};
use crate::web::dto::{UploadForm, UploadResponse};
use crate::web::error::{ApiError, ErrorBody};
use crate::SoundboardError;

/// Message for a title that normalizes to nothing.
pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required.";

/// Message for a request without an audio file.
pub const AUDIO_REQUIRED_MESSAGE: &str = "Audio file is required.";

/// Message for a request body that is not valid multipart data.
pub const INVALID_MULTIPART_MESSAGE: &str = "Invalid multipart data.";

/// An accepted `audio` part.
struct AudioPart {
    original_name: String,
    content: Vec<u8>,
}

/// POST /api/upload - Upload a clip.
///
/// Request body: multipart/form-data with "title" and "audio" fields.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "sounds",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Clip stored", body = UploadResponse),
        (status = 400, description = "Missing title or file, bad format, or file too large", body = ErrorBody),
        (status = 500, description = "Clip could not be stored", body = ErrorBody)
    )
)]
pub async fn upload_sound(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!("Rejected upload request: {}", e);
        ApiError::bad_request(INVALID_MULTIPART_MESSAGE)
    })?;
    let limit = state.max_upload_size;

    let mut title: Option<String> = None;
    let mut audio: Option<AudioPart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => {
                title = Some(field.text().await.map_err(|e| multipart_error(e, limit))?);
            }
            "audio" => {
                // A part without a filename carries no file.
                let Some(original_name) = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                else {
                    continue;
                };

                state
                    .filter
                    .check(&original_name, field.content_type())
                    .map_err(|e| {
                        tracing::warn!(
                            filename = %original_name,
                            content_type = ?field.content_type(),
                            "Rejected upload: {}",
                            e
                        );
                        ApiError::from(e)
                    })?;

                let content = read_limited(field, limit).await?;
                audio = Some(AudioPart {
                    original_name,
                    content,
                });
            }
            _ => {}
        }
    }

    let slug = slugify_title(title.as_deref().unwrap_or(""));
    if slug.is_empty() {
        return Err(SoundboardError::Validation(TITLE_REQUIRED_MESSAGE.to_string()).into());
    }

    let audio = audio
        .ok_or_else(|| SoundboardError::Validation(AUDIO_REQUIRED_MESSAGE.to_string()))?;

    let Some(ext) = extension_of(&audio.original_name)
        .filter(|_| is_allowed_extension(&audio.original_name))
    else {
        return Err(SoundboardError::UnsupportedFormat.into());
    };

    let size = audio.content.len();
    let filename = state
        .library
        .save_async(slug, ext, audio.content)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save upload: {}", e);
            ApiError::from(e)
        })?;

    tracing::info!(filename = %filename, bytes = size, "Stored uploaded sound");

    Ok(Json(UploadResponse::stored(filename)))
}

/// Read a file part, failing as soon as it grows past `limit` bytes.
async fn read_limited(mut field: Field<'_>, limit: u64) -> Result<Vec<u8>, ApiError> {
    let mut content = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, limit))? {
        if (content.len() + chunk.len()) as u64 > limit {
            tracing::warn!(limit, "Rejected upload: file too large");
            return Err(SoundboardError::FileTooLarge { limit }.into());
        }
        content.extend_from_slice(&chunk);
    }

    Ok(content)
}

/// Map a multipart parsing failure to an API error.
///
/// Hitting the transport body limit surfaces as the size error.
fn multipart_error(e: MultipartError, limit: u64) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(limit, "Rejected upload: request body too large");
        return SoundboardError::FileTooLarge { limit }.into();
    }
    tracing::warn!("Failed to read multipart data: {}", e);
    ApiError::bad_request(INVALID_MULTIPART_MESSAGE)
}
