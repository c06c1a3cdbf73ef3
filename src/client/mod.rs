//! Client side of the soundboard.
//!
//! Mirrors what the browser pages do so the behavior can be driven and
//! tested from Rust:
//! - Fetching the manifest from the listing endpoint
//! - The playback controller behind the sound button
//! - The upload form on the admin page

mod manifest;
mod playback;
mod upload;

pub use manifest::{HttpManifestSource, ManifestSource, StaticManifestSource};
pub use playback::{ClipPlayer, PlaybackController, PlaybackState, FALLBACK_SOUNDS};
pub use upload::{
    AdminForm, PendingFile, UploadClient, UploadFeedback, UploadOutcome, UPLOAD_SUCCESS_SUFFIX,
};
