//! Soundboard - browse, play, and upload short audio clips.
//!
//! A small HTTP service that exposes a directory of audio clips, accepts
//! new uploads into it, and serves the pages that play them.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod sound;
pub mod web;

pub use client::{
    AdminForm, ClipPlayer, HttpManifestSource, ManifestSource, PlaybackController, PlaybackState,
    UploadClient, UploadFeedback,
};
pub use config::Config;
pub use error::{Result, SoundboardError};
pub use sound::{slugify_title, SoundFile, SoundLibrary, UploadFilter};
pub use web::WebServer;
