//! Sound listing handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::web::dto::{SoundEntry, SoundListResponse};
use crate::web::error::{ApiError, ErrorBody};

/// Message returned when the storage directory cannot be read.
pub const LIST_ERROR_MESSAGE: &str = "Could not load sound list.";

/// GET /api/sounds - List playable clips.
///
/// The directory is read on every call; nothing is cached.
#[utoipa::path(
    get,
    path = "/api/sounds",
    tag = "sounds",
    responses(
        (status = 200, description = "Clips sorted by name", body = SoundListResponse),
        (status = 500, description = "Storage directory unreadable", body = ErrorBody)
    )
)]
pub async fn list_sounds(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SoundListResponse>, ApiError> {
    let sounds = state.library.list_async().await.map_err(|e| {
        tracing::error!("Failed to list sounds: {}", e);
        ApiError::internal(LIST_ERROR_MESSAGE)
    })?;

    Ok(Json(SoundListResponse {
        sounds: sounds.into_iter().map(SoundEntry::from).collect(),
    }))
}
