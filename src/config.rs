//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title shown above the board.
    title: String,

    /// File that receives log output while the TUI owns the terminal.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Whether to show the key help panel.
    show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe Classic".to_string(),
            log_file: PathBuf::from("tictactoe_classic.log"),
            log_filter: "info".to_string(),
            show_help: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Keys left out keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(title = %settings.title, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Replaces the log filter directive.
    pub fn with_log_filter(mut self, log_filter: String) -> Self {
        self.log_filter = log_filter;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("title = \"Noughts\"\n").expect("valid toml");
        assert_eq!(settings.title(), "Noughts");
        assert_eq!(settings.log_filter(), "info");
        assert!(*settings.show_help());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Settings::from_toml("show_help = \"maybe\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(Settings::load(None).expect("defaults"), Settings::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_file = \"game.log\"\nlog_filter = \"debug\"\nshow_help = false")
            .expect("write");
        let settings = Settings::from_file(file.path()).expect("load");
        assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
        assert_eq!(settings.log_filter(), "debug");
        assert!(!*settings.show_help());
        assert_eq!(settings.title(), "Tic Tac Toe Classic");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_log_file(PathBuf::from("other.log"))
            .with_log_filter("trace".to_string());
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
        assert_eq!(settings.log_filter(), "trace");
    }
}
