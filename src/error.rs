//! Error types for the soundboard.

use thiserror::Error;

/// Common error type for the soundboard.
#[derive(Error, Debug)]
pub enum SoundboardError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("{0}")]
    Validation(String),

    /// Uploaded payload exceeds the configured limit.
    ///
    /// The limit is stored in bytes.
    #[error("File must be smaller than {}.", format_size(.limit))]
    FileTooLarge { limit: u64 },

    /// File extension or MIME type outside the allowed set.
    #[error("Only MP3 and M4A files are allowed.")]
    UnsupportedFormat,

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Collation data could not be loaded.
    #[error("collation error: {0}")]
    Collation(String),
}

/// Human-readable size limit, rounded up so the stated limit is never
/// smaller than the real one.
///
/// Whole mebibytes print as `5MB`, other sizes of at least 1 MiB with one
/// decimal (`1.5MB`), and anything smaller in KB.
pub fn format_size(bytes: &u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if *bytes < MIB {
        return format!("{}KB", bytes.div_ceil(KIB));
    }

    let tenths = (bytes * 10).div_ceil(MIB);
    if tenths % 10 == 0 {
        format!("{}MB", tenths / 10)
    } else {
        format!("{}.{}MB", tenths / 10, tenths % 10)
    }
}

impl From<reqwest::Error> for SoundboardError {
    fn from(e: reqwest::Error) -> Self {
        SoundboardError::Http(e.to_string())
    }
}

/// Result type alias for soundboard operations.
pub type Result<T> = std::result::Result<T, SoundboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = SoundboardError::Validation("Title is required.".to_string());
        assert_eq!(err.to_string(), "Title is required.");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = SoundboardError::FileTooLarge {
            limit: 5 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File must be smaller than 5MB.");
    }

    #[test]
    fn test_file_too_large_display_other_limits() {
        let err = SoundboardError::FileTooLarge {
            limit: 3 * 1024 * 1024 / 2,
        };
        assert_eq!(err.to_string(), "File must be smaller than 1.5MB.");

        let err = SoundboardError::FileTooLarge { limit: 512 * 1024 };
        assert_eq!(err.to_string(), "File must be smaller than 512KB.");
    }

    #[test]
    fn test_format_size_rounds_up() {
        assert_eq!(format_size(&(5 * 1024 * 1024)), "5MB");
        assert_eq!(format_size(&(5 * 1024 * 1024 + 1)), "5.1MB");
        assert_eq!(format_size(&(1024 * 1024 + 1024 * 1024 / 4)), "1.3MB");
        assert_eq!(format_size(&1000), "1KB");
        assert_eq!(format_size(&0), "0KB");
    }

    #[test]
    fn test_unsupported_format_display() {
        assert_eq!(
            SoundboardError::UnsupportedFormat.to_string(),
            "Only MP3 and M4A files are allowed."
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = SoundboardError::NotFound("index.html".to_string());
        assert_eq!(err.to_string(), "index.html not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SoundboardError = io_err.into();
        assert!(matches!(err, SoundboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(SoundboardError::Config("bad".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
