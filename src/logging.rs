//! Tracing setup: stdout, optionally teed into a log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Filter used when the configured one is empty or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Build the filter for a configured level.
///
/// `level` takes `EnvFilter` directive syntax, so both `debug` and
/// `info,tower_http=debug` work. Anything that does not parse falls back
/// to `info`.
pub fn level_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new(DEFAULT_FILTER);
    }

    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level {level:?} ({e}), using {DEFAULT_FILTER}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// `RUST_LOG` when set, the configured level otherwise.
fn active_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Install the global subscriber.
///
/// With `file` set, every line goes to stdout and is appended to that
/// file; its parent directory is created on demand.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let Some(file) = config.file.as_deref() else {
        init_console_only(&config.level);
        return Ok(());
    };

    let parent = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }

    let log_file = OpenOptions::new().create(true).append(true).open(file)?;
    let writer = std::io::stdout.and(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(active_filter(&config.level))
        .init();

    Ok(())
}

/// Install a stdout-only subscriber.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(active_filter(level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_accepts_levels_and_directives() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(level_filter(" warn ").to_string(), "warn");
        assert_eq!(
            level_filter("soundboard=trace").to_string(),
            "soundboard=trace"
        );
    }

    #[test]
    fn test_level_filter_falls_back_to_info() {
        assert_eq!(level_filter("").to_string(), "info");
        assert_eq!(level_filter("soundboard=loud").to_string(), "info");
    }
}
