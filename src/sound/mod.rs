//! Sound clip domain for the soundboard.
//!
//! This module covers everything between an HTTP request and the storage
//! directory:
//! - Allowed audio formats and the upload acceptance filter
//! - Title slugs used as stored filenames
//! - The storage directory itself (listing and collision-free persistence)

mod format;
mod library;
mod slug;

pub use format::{extension_of, is_allowed_extension, is_allowed_mime, UploadFilter};
pub use library::{sort_names, SoundFile, SoundLibrary};
pub use slug::slugify_title;

/// File extensions accepted for uploads and exposed by the listing.
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".mp3", ".m4a"];

/// MIME types accepted for uploads.
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["audio/mpeg", "audio/mp4", "audio/x-m4a", "audio/m4a"];

/// Maximum length for a title slug (in characters).
pub const MAX_SLUG_LENGTH: usize = 60;

/// Default maximum upload size (5MB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Public URL prefix under which stored clips are served.
pub const PUBLIC_SOUNDS_PATH: &str = "/sounds";
