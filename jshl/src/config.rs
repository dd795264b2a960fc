//! Configuration module for the jshl CLI.
//!
//! Settings are read from `jshl.toml`. Every field has a default, so a
//! config file only needs the values it changes, and command-line flags
//! override whatever the file says.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::TokenFormat;
use crate::error::{JshlError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jshl.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Highlight-specific configuration.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Token dump configuration.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Highlight-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Emit ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Prefix every line with its number.
    #[serde(default)]
    pub line_numbers: bool,
}

/// Token dump configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Leave whitespace and comments out of the dump.
    #[serde(default)]
    pub skip_trivia: bool,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of worker threads.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

fn default_jobs() -> usize {
    get_num_cpus()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: true,
            line_numbers: false,
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_trivia: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/jshl/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using configuration file");
                Self::load_from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JshlError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JshlError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Reject values that parse as TOML but make no sense.
    pub fn validate(&self) -> Result<()> {
        self.tokens.format.parse::<TokenFormat>()?;
        if self.check.jobs == 0 {
            return Err(JshlError::Validation(
                "check.jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("jshl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("jshl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
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

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.highlight.color);
        assert!(!config.highlight.line_numbers);
        assert_eq!(config.tokens.format, "text");
        assert!(!config.tokens.skip_trivia);
        assert!(config.check.jobs >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[tokens]\nformat = \"json\"\n");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.tokens.format, "json");
        assert!(config.highlight.color);
        assert_eq!(config.check, CheckConfig::default());
    }

    #[test]
    fn test_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "[highlight]\ncolor = false\nline_numbers = true\n\n\
             [tokens]\nformat = \"text\"\nskip_trivia = true\n\n\
             [check]\njobs = 2\n",
        );

        let config = Config::load_from_path(&path).unwrap();
        assert!(!config.highlight.color);
        assert!(config.highlight.line_numbers);
        assert!(config.tokens.skip_trivia);
        assert_eq!(config.check.jobs, 2);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/jshl.toml"));
        assert!(matches!(result, Err(JshlError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[tokens\nformat = ");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.tokens.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(JshlError::Validation(_))));

        let mut config = Config::default();
        config.check.jobs = 0;
        assert!(matches!(config.validate(), Err(JshlError::Validation(_))));
    }
}
