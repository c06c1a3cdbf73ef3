//! Router configuration for the soundboard.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::dto::{SoundEntry, SoundListResponse, UploadForm, UploadResponse};
use super::error::ErrorBody;
use super::handlers::{self, admin_page, home_page, list_sounds, upload_sound, AppState};
use crate::sound::PUBLIC_SOUNDS_PATH;

/// Room for multipart boundaries, headers and the title field on top of
/// the file size limit.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// OpenAPI document for the JSON endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_sounds, handlers::upload_sound),
    components(schemas(SoundListResponse, SoundEntry, UploadResponse, UploadForm, ErrorBody)),
    tags((name = "sounds", description = "Listing and uploading clips"))
)]
pub struct ApiDoc;

/// Create the main router.
///
/// Besides the two pages and the JSON API, clips are served from the
/// storage directory under `/sounds` and any other path is looked up in
/// the public directory.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let body_limit = usize::try_from(app_state.max_upload_size)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    let api_routes = Router::new()
        .route("/sounds", get(list_sounds))
        .route(
            "/upload",
            post(upload_sound).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/openapi.json", get(openapi_json));

    let sounds_service = ServeDir::new(app_state.storage_dir());
    let public_service = ServeDir::new(&app_state.public_dir);

    Router::new()
        .route("/", get(home_page))
        .route("/admin", get(admin_page))
        .nest("/api", api_routes)
        .nest_service(PUBLIC_SOUNDS_PATH, sounds_service)
        .fallback_service(public_service)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// OpenAPI document handler.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
