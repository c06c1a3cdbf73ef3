//! Upload form on the admin page.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::web::dto::UploadResponse;
use crate::Result;

/// Appended to the server's confirmation message.
pub const UPLOAD_SUCCESS_SUFFIX: &str = "\u{1F595}";

/// Shown while the request is in flight.
const UPLOADING_MESSAGE: &str = "Uploading...";

/// Shown when the server gives no usable error message.
const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Result of an upload request that reached the server.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The clip was stored.
    Stored(UploadResponse),
    /// The server refused the upload.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message, if any.
        error: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// HTTP client for the upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the upload endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }

    /// Send a title and an optional file as a multipart form.
    pub async fn upload(&self, title: &str, file: Option<&PendingFile>) -> Result<UploadOutcome> {
        let mut form = Form::new().text("title", title.to_string());
        if let Some(file) = file {
            let part = Part::bytes(file.content.clone())
                .file_name(file.filename.clone())
                .mime_str(&file.mime)?;
            form = form.part("audio", part);
        }

        let response = self.client.post(self.endpoint()).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(UploadOutcome::Stored(response.json().await?));
        }

        let body: ErrorResponse = response.json().await?;
        Ok(UploadOutcome::Rejected {
            status: status.as_u16(),
            error: body.error,
        })
    }
}

/// A file picked in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Original filename.
    pub filename: String,
    /// Declared MIME type.
    pub mime: String,
    /// File content.
    pub content: Vec<u8>,
}

/// Status line under the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFeedback {
    /// Nothing submitted yet.
    Idle,
    /// Request in flight.
    Uploading,
    /// Stored; carries the text shown to the user.
    Success(String),
    /// Failed; carries the text shown to the user.
    Failure(String),
}

impl UploadFeedback {
    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            UploadFeedback::Idle => "",
            UploadFeedback::Uploading => UPLOADING_MESSAGE,
            UploadFeedback::Success(message) | UploadFeedback::Failure(message) => message,
        }
    }

    /// Whether the success styling applies.
    pub fn is_success(&self) -> bool {
        matches!(self, UploadFeedback::Success(_))
    }
}

/// State of the admin page form.
#[derive(Debug, Clone)]
pub struct AdminForm {
    /// Title field.
    pub title: String,
    /// Selected file.
    pub file: Option<PendingFile>,
    feedback: UploadFeedback,
}

impl Default for AdminForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            file: None,
            feedback: UploadFeedback::Idle,
        }
    }

    /// Current feedback line.
    pub fn feedback(&self) -> &UploadFeedback {
        &self.feedback
    }

    /// Submit the form.
    ///
    /// Clears the fields on success; on failure they are kept so the user
    /// can correct them.
    pub async fn submit(&mut self, client: &UploadClient) -> &UploadFeedback {
        self.feedback = UploadFeedback::Uploading;

        let result = client.upload(&self.title, self.file.as_ref()).await;
        self.apply(result);

        &self.feedback
    }

    fn apply(&mut self, result: Result<UploadOutcome>) {
        self.feedback = match result {
            Ok(UploadOutcome::Stored(response)) => {
                self.title.clear();
                self.file = None;
                UploadFeedback::Success(format!("{} {}", response.message, UPLOAD_SUCCESS_SUFFIX))
            }
            Ok(UploadOutcome::Rejected { error, .. }) => UploadFeedback::Failure(
                error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()),
            ),
            Err(e) => UploadFeedback::Failure(e.to_string()),
        };
    }
}
