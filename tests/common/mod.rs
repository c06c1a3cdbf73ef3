//! Test helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use tempfile::TempDir;

use soundboard::web::handlers::AppState;
use soundboard::web::router::create_router;
use soundboard::SoundLibrary;

/// Five mebibytes, the default upload limit.
pub const FIVE_MIB: usize = 5 * 1024 * 1024;

/// A router under test with its own document root.
pub struct TestApp {
    pub server: TestServer,
    pub public_dir: TempDir,
}

impl TestApp {
    /// Directory the clips live in.
    pub fn storage_dir(&self) -> PathBuf {
        self.public_dir.path().join("sounds")
    }

    /// Place a file directly into the storage directory.
    pub fn put_sound(&self, name: &str, content: &[u8]) {
        fs::write(self.storage_dir().join(name), content).expect("Failed to write sound");
    }

    /// Names currently in the storage directory, sorted.
    pub fn stored_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.storage_dir())
            .expect("Failed to read storage dir")
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }
}

/// Create a test server backed by a temporary public directory.
pub fn create_test_app() -> TestApp {
    create_test_app_with_limit(FIVE_MIB as u64)
}

/// Create a test server with a custom upload size limit.
pub fn create_test_app_with_limit(max_upload_size: u64) -> TestApp {
    let public_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        public_dir.path().join("index.html"),
        "<html><body><button id=\"sound-button\">Press me</button></body></html>",
    )
    .unwrap();
    fs::write(
        public_dir.path().join("admin.html"),
        "<html><body><form id=\"upload-form\"></form></body></html>",
    )
    .unwrap();
    fs::write(public_dir.path().join("script.js"), "console.log('hi');").unwrap();

    let library =
        SoundLibrary::new(public_dir.path().join("sounds")).expect("Failed to create library");
    let app_state =
        Arc::new(AppState::new(library, public_dir.path()).with_max_upload_size(max_upload_size));

    let router = create_router(app_state);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp { server, public_dir }
}

/// Build an upload form with a title and an audio part.
pub fn upload_form(title: &str, filename: &str, mime: &str, content: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_text("title", title).add_part(
        "audio",
        Part::bytes(content).file_name(filename).mime_type(mime),
    )
}
