//! Configuration management
//!
//! Settings are loaded from the first source that exists:
//! 1. Command-line argument (`--config` flag)
//! 2. Config file at the platform-specific location
//! 3. Built-in defaults
//!
//! ## Configuration File Locations
//!
//! - **Linux/Unix**: `$XDG_CONFIG_HOME/termio/config.toml` or `~/.config/termio/config.toml`
//! - **macOS**: `~/Library/Application Support/termio/config.toml`
//! - **Windows**: `%APPDATA%\termio\config.toml`
//!
//! ## Configuration Format
//!
//! ```toml
//! press_enter_message = "Hit enter..."
//! clear_lines = 80
//! color = "never"
//! log_level = "debug"
//! ```
//!
//! Only the `termio` binary reads files. Library users build [`Settings`]
//! themselves or take the defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PRESS_ENTER_MESSAGE: &str = "Press enter to continue!...";
pub const DEFAULT_CLEAR_LINES: usize = 50;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// When the binary should color its own status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Printed by `press_enter` when no message is given
    pub press_enter_message: String,
    /// Line breaks emitted by `termio clear` without an explicit count
    pub clear_lines: usize,
    pub color: ColorMode,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            press_enter_message: DEFAULT_PRESS_ENTER_MESSAGE.to_string(),
            clear_lines: DEFAULT_CLEAR_LINES,
            color: ColorMode::Auto,
            log_level: None,
        }
    }
}

impl Settings {
    /// Load settings from file or use defaults
    ///
    /// An explicit path must exist. The platform location is optional.
    pub fn load(explicit_config_path: Option<PathBuf>) -> Result<Settings, ConfigError> {
        if let Some(config_path) = explicit_config_path {
            debug!(path = %config_path.display(), "Loading config from explicit path");
            return Self::load_from_file(&config_path);
        }

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                debug!(path = %config_path.display(), "Loading config from platform location");
                return Self::load_from_file(&config_path);
            }
            debug!(path = %config_path.display(), "Config file not found at platform location");
        }

        debug!("Using default settings");
        Ok(Settings::default())
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Settings, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn config_file_path() -> Option<PathBuf> {
        let mut config_dir = dirs::config_dir()?;
        config_dir.push("termio");
        config_dir.push("config.toml");
        Some(config_dir)
    }

    fn load_from_file(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_toml(&contents)?;
        debug!(?settings, "Parsed settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.press_enter_message, "Press enter to continue!...");
        assert_eq!(settings.clear_lines, 50);
        assert_eq!(settings.color, ColorMode::Auto);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml("clear_lines = 10\n").unwrap();
        assert_eq!(settings.clear_lines, 10);
        assert_eq!(settings.press_enter_message, DEFAULT_PRESS_ENTER_MESSAGE);
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_toml(
            r#"
press_enter_message = "Hit enter"
clear_lines = 3
color = "never"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(settings.press_enter_message, "Hit enter");
        assert_eq!(settings.clear_lines, 3);
        assert_eq!(settings.color, ColorMode::Never);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Settings::from_toml("colour = \"always\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_color_mode() {
        let result = Settings::from_toml("color = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = Settings::load(Some(PathBuf::from("/nonexistent/termio/config.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
