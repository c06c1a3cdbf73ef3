//! API error handling for the soundboard.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::SoundboardError;

/// Generic message for failures without a usable description.
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed.";

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad request (400).
    BadRequest,
    /// Not found (404).
    NotFound,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
///
/// Messages are plain strings meant to be shown to the user as-is.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Error code of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<SoundboardError> for ApiError {
    fn from(err: SoundboardError) -> Self {
        match &err {
            SoundboardError::Validation(_)
            | SoundboardError::UnsupportedFormat
            | SoundboardError::FileTooLarge { .. } => ApiError::bad_request(err.to_string()),
            SoundboardError::NotFound(_) => ApiError::not_found(err.to_string()),
            _ => {
                tracing::error!("Internal error: {}", err);
                let message = err.to_string();
                if message.is_empty() {
                    ApiError::internal(GENERIC_UPLOAD_ERROR)
                } else {
                    ApiError::internal(message)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_constructors() {
        assert_eq!(ApiError::bad_request("bad").code(), ErrorCode::BadRequest);
        assert_eq!(ApiError::not_found("missing").code(), ErrorCode::NotFound);
        assert_eq!(ApiError::internal("error").code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_from_client_input_errors() {
        let err: ApiError = SoundboardError::UnsupportedFormat.into();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "Only MP3 and M4A files are allowed.");

        let err: ApiError = SoundboardError::FileTooLarge {
            limit: 5 * 1024 * 1024,
        }
        .into();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "File must be smaller than 5MB.");

        let err: ApiError = SoundboardError::Validation("Title is required.".into()).into();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn test_from_io_error_keeps_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ApiError = SoundboardError::Io(io_err).into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.message().contains("read-only"));
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = ApiError::bad_request("Title is required.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Title is required." }));
    }
}
