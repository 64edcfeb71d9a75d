//! Configuration handling for the todo CLI
//!
//! Configuration is read from the file named by `--config` (or
//! `TODO_LIST_CONFIG`), falling back to `config.toml` in the per-user config
//! directory. Every field has a default, so an absent file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for lists built by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Title used when `--title` is not given
    pub title: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (text or json)
    pub format: OutputFormat,

    /// Print verbose diagnostics to stderr
    pub verbose: bool,
}

/// Combined configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads configuration from an explicit path or the per-user location
    ///
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match Self::user_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parses and validates configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the per-user config directory
    pub fn user_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "todo-list", "todo-list")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the per-user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        Self::user_config_dir().map(|dir| dir.join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.list.title.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "list.title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.list.title, "Todos");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.verbose);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[list]
title = "Today's Todos"

[output]
format = "json"
verbose = true
"#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.list.title, "Today's Todos");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.verbose);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::from_toml_str("[output]\nformat = \"json\"\n").unwrap();

        assert_eq!(config.list.title, "Todos");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn empty_title_is_invalid() {
        let err = Config::from_toml_str("[list]\ntitle = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[list\ntitle = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_format_is_parse_error() {
        let err = Config::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[list]\ntitle = \"Groceries\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.list.title, "Groceries");
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(Config::load(Some(&path)).is_err());
    }
}
