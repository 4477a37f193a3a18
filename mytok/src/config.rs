//! Configuration module for the mytok CLI.
//!
//! This module handles loading `mytok.toml`.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use mython_lex::LexerOptions;
use serde::{Deserialize, Serialize};

use crate::commands::common::OutputFormat;
use crate::error::{MytokError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "mytok.toml";

/// Application configuration structure.
///
/// ```toml
/// verbose = false
///
/// [lexer]
/// strict = false
///
/// [output]
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Options handed to the lexer.
    #[serde(default)]
    pub lexer: LexerOptions,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token dump settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format used by `mytok tokens` when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/mytok/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MytokError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MytokError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("mytok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("mytok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.lexer.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mytok.toml");
        std::fs::write(
            &config_path,
            "verbose = true\n\n[lexer]\nstrict = true\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(
            loaded,
            Config {
                verbose: true,
                lexer: LexerOptions::strict(),
                output: OutputConfig {
                    format: OutputFormat::Json,
                },
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mytok.toml");
        std::fs::write(&config_path, "[lexer]\nstrict = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.lexer.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mytok.toml");
        std::fs::write(&config_path, "[lexer\nstrict = ").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, MytokError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/mytok.toml"));
        assert!(result.is_err());
    }
}
