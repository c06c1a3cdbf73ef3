//! Fixed HTML pages.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::AppState;
use crate::web::error::ApiError;
use crate::SoundboardError;

/// Home page document.
pub const HOME_PAGE: &str = "index.html";

/// Admin/upload page document.
pub const ADMIN_PAGE: &str = "admin.html";

async fn read_page(state: &AppState, name: &str) -> Result<Html<String>, ApiError> {
    let path = state.public_file(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(Html(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Page not found: {}", path.display());
            Err(SoundboardError::NotFound("Page".to_string()).into())
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            Err(ApiError::internal("Could not load page."))
        }
    }
}

/// GET / - Home page with the sound button.
pub async fn home_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    read_page(&state, HOME_PAGE).await
}

/// GET /admin - Upload page.
pub async fn admin_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    read_page(&state, ADMIN_PAGE).await
}
