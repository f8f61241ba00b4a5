//! Configuration management for mdtoc.
//!
//! Parses `mdtoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [toc]
//! max_level = 2
//! include_first = true
//! ```

use std::path::{Path, PathBuf};

use mdtoc_core::TocOptions;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override maximum heading depth.
    pub max_level: Option<u8>,
    /// Override whether the first heading is listed.
    pub include_first: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdtoc.toml";

/// Deepest heading level markdown supports.
const MAX_HEADING_LEVEL: u8 = 6;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Table of contents configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Maximum heading depth to include (1-6).
    pub max_level: u8,
    /// Whether the first heading (usually the document title) is listed.
    pub include_first: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        let defaults = TocOptions::default();
        Self {
            max_level: defaults.max_level,
            include_first: !defaults.skip_first,
        }
    }
}

impl TocConfig {
    /// Rendering options for the core pipeline.
    #[must_use]
    pub fn options(&self) -> TocOptions {
        TocOptions {
            max_level: self.max_level,
            skip_first: !self.include_first,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdtoc.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading and validated together with
    /// the file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is out of range.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_level) = settings.max_level {
            self.toc.max_level = max_level;
        }
        if let Some(include_first) = settings.include_first {
            self.toc.include_first = include_first;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `toc.max_level` is outside 1-6.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HEADING_LEVEL).contains(&self.toc.max_level) {
            return Err(ConfigError::Validation(format!(
                "toc.max_level must be between 1 and {MAX_HEADING_LEVEL}"
            )));
        }
        Ok(())
    }
}
