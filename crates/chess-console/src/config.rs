//! Configuration file loading for the console game.
//!
//! Settings come from an optional TOML file. Every field has a default, so
//! a missing file or an empty one yields a playable setup.

use std::path::{Path, PathBuf};

use chess_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Console game settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Side that moves first. Defaults to white.
    #[serde(default = "default_first_player")]
    pub first_player: Color,
    /// Whether the board is followed by the list of captured pieces.
    #[serde(default = "default_show_captures")]
    pub show_captures: bool,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_first_player() -> Color {
    Color::White
}

fn default_show_captures() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            first_player: default_first_player(),
            show_captures: default_show_captures(),
            log_level: default_log_level(),
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration at `path`, or the defaults if there is no
    /// file there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess.toml` in the working
    /// directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
first_player = "black"
show_captures = false
log_level = "debug"
"#;

        let config: ConsoleConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.first_player, Color::Black);
        assert!(!config.show_captures);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.first_player, Color::White);
        assert!(config.show_captures);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: ConsoleConfig = toml::from_str("show_captures = false").unwrap();
        assert_eq!(config.first_player, Color::White);
        assert!(!config.show_captures);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let result: Result<ConsoleConfig, _> = toml::from_str(r#"first_player = "green""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = std::env::temp_dir().join("chess-console-no-such-config.toml");
        let config = ConsoleConfig::load(&path).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "chess-console-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "first_player = \"black\"\n").unwrap();

        let config = ConsoleConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().first_player, Color::Black);
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "chess-console-bad-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "show_captures = [").unwrap();

        let result = ConsoleConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(ConsoleConfig::default_path(), PathBuf::from("chess.toml"));
    }
}
