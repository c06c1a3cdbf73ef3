//! Configuration module for the soundboard.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, SoundboardError};

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Sound storage and static asset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundsConfig {
    /// Document root holding the HTML pages and client scripts.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    /// Directory holding the audio clips.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    /// Maximum upload size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_storage_dir() -> String {
    "public/sounds".to_string()
}

fn default_max_upload_size() -> u64 {
    crate::sound::DEFAULT_MAX_UPLOAD_SIZE
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            storage_dir: default_storage_dir(),
            max_upload_size_bytes: default_max_upload_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter: a level (trace, debug, info, warn, error) or
    /// `EnvFilter` directives such as `info,tower_http=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional path to a log file. Console only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Sound storage settings.
    #[serde(default)]
    pub sounds: SoundsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SoundboardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SoundboardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PORT`: Override the listening port
    pub fn apply_env_overrides(&mut self) {
        self.apply_port_override(std::env::var(PORT_ENV).ok().as_deref());
    }

    fn apply_port_override(&mut self, value: Option<&str>) {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return;
        };
        match value.parse::<u16>() {
            Ok(port) => self.server.port = port,
            Err(_) => tracing::warn!("Ignoring invalid {} value: {:?}", PORT_ENV, value),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.sounds.max_upload_size_bytes == 0 {
            return Err(SoundboardError::Config(
                "max_upload_size_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sounds.public_dir, "public");
        assert_eq!(config.sounds.storage_dir, "public/sounds");
        assert_eq!(config.sounds.max_upload_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[sounds]
public_dir = "web"
storage_dir = "/var/lib/soundboard"
max_upload_size_bytes = 1048576

[logging]
level = "debug"
file = "logs/soundboard.log"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.sounds.public_dir, "web");
        assert_eq!(config.sounds.storage_dir, "/var/lib/soundboard");
        assert_eq!(config.sounds.max_upload_size_bytes, 1048576);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some("logs/soundboard.log"));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 4000
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.sounds.storage_dir, "public/sounds");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("[server\nport = ");
        assert!(matches!(result, Err(SoundboardError::Config(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("/nonexistent/soundboard.toml");
        assert!(matches!(result, Err(SoundboardError::Io(_))));
    }

    #[test]
    fn test_load_with_env_missing_file_uses_defaults() {
        let config = Config::load_with_env("/nonexistent/soundboard.toml").unwrap();
        assert_eq!(config.sounds.public_dir, "public");
    }

    #[test]
    fn test_port_override() {
        let mut config = Config::default();
        config.apply_port_override(Some("8081"));
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_port_override_empty_or_invalid_is_ignored() {
        let mut config = Config::default();
        config.apply_port_override(Some(""));
        assert_eq!(config.server.port, 3000);

        config.apply_port_override(Some("not-a-port"));
        assert_eq!(config.server.port, 3000);

        config.apply_port_override(Some("70000"));
        assert_eq!(config.server.port, 3000);

        config.apply_port_override(None);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_zero_upload_limit() {
        let mut config = Config::default();
        config.sounds.max_upload_size_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }
}
