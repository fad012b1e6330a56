//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side opens the game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The automated player opens.
    #[default]
    #[display("ai")]
    Ai,
    /// The human opens.
    #[display("human")]
    Human,
}

/// Configuration for a console game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side that moves first.
    #[serde(default)]
    first_mover: FirstMover,
}

impl GameConfig {
    /// Creates a configuration with the given opening side.
    pub fn new(first_mover: FirstMover) -> Self {
        Self { first_mover }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the opening side when an override is given.
    pub fn with_first_mover(mut self, first_mover: Option<FirstMover>) -> Self {
        if let Some(first_mover) = first_mover {
            debug!(%first_mover, "Overriding first mover");
            self.first_mover = first_mover;
        }
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
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_first_mover() {
        let file = write_config("first_mover = \"human\"\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.first_mover(), FirstMover::Human);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.first_mover(), FirstMover::Ai);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let file = write_config("first_mover = \"nobody\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_override_first_mover() {
        let config = GameConfig::default().with_first_mover(Some(FirstMover::Human));
        assert_eq!(*config.first_mover(), FirstMover::Human);
        let config = config.with_first_mover(None);
        assert_eq!(*config.first_mover(), FirstMover::Human);
    }
}
