//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::color::CurveMode;
use crate::models::{DEFAULT_COLOR_COUNT, MAX_COLOR_COUNT, MIN_COLOR_COUNT};

/// Environment variable that replaces the platform config directory.
pub const CONFIG_DIR_ENV: &str = "COLOR_THEMER_CONFIG_DIR";

/// Smallest terminal swatch width, in columns.
pub const MIN_SWATCH_WIDTH: u16 = 4;
/// Largest terminal swatch width, in columns.
pub const MAX_SWATCH_WIDTH: u16 = 24;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Palette snapshot file (defaults to `palettes.json` in the config directory)
    pub data_file: Option<PathBuf>,
}

/// Defaults for newly generated palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Shade count of new sets
    #[serde(default = "default_color_count")]
    pub color_count: usize,
    /// Lightness or contrast spacing
    #[serde(default)]
    pub curve_mode: CurveMode,
}

const fn default_color_count() -> usize {
    DEFAULT_COLOR_COUNT
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            curve_mode: CurveMode::default(),
        }
    }
}

/// Terminal output preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print contrast ratios next to swatches
    #[serde(default = "default_show_contrast")]
    pub show_contrast: bool,
    /// Swatch width in terminal columns
    #[serde(default = "default_swatch_width")]
    pub swatch_width: u16,
}

const fn default_show_contrast() -> bool {
    true
}

const fn default_swatch_width() -> u16 {
    9
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_contrast: default_show_contrast(),
            swatch_width: default_swatch_width(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorThemer/config.toml`
/// - macOS: `~/Library/Application Support/ColorThemer/config.toml`
/// - Windows: `%APPDATA%\ColorThemer\config.toml`
///
/// `COLOR_THEMER_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Palette generation defaults
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Terminal output preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/ColorThemer/`
    /// - macOS: `~/Library/Application Support/ColorThemer/`
    /// - Windows: `%APPDATA%\ColorThemer\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ColorThemer");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Palette snapshot location: the configured file, else `palettes.json`
    /// in the config directory.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.paths.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("palettes.json")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `color_count` is within 1-20
    /// - `swatch_width` is within 4-24
    pub fn validate(&self) -> Result<()> {
        let count = self.generation.color_count;
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
            anyhow::bail!(
                "generation.color_count {count} is out of range ({MIN_COLOR_COUNT}-{MAX_COLOR_COUNT})"
            );
        }

        let width = self.ui.swatch_width;
        if !(MIN_SWATCH_WIDTH..=MAX_SWATCH_WIDTH).contains(&width) {
            anyhow::bail!(
                "ui.swatch_width {width} is out of range ({MIN_SWATCH_WIDTH}-{MAX_SWATCH_WIDTH})"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.data_file, None);
        assert_eq!(config.generation.color_count, 11);
        assert_eq!(config.generation.curve_mode, CurveMode::Lightness);
        assert!(config.ui.show_contrast);
        assert_eq!(config.ui.swatch_width, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_ranges() {
        let mut config = Config::new();
        config.generation.color_count = 0;
        assert!(config.validate().is_err());

        config.generation.color_count = 20;
        assert!(config.validate().is_ok());

        config.ui.swatch_width = 3;
        assert!(config.validate().is_err());
        config.ui.swatch_width = 24;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[generation]\ncurve_mode = \"contrast\"\n").unwrap();
        assert_eq!(config.generation.curve_mode, CurveMode::Contrast);
        assert_eq!(config.generation.color_count, 11);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.paths.data_file = Some(temp_dir.path().join("colors.json"));
        config.generation.color_count = 9;
        config.ui.show_contrast = false;

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("[generation]"));
        assert!(content.contains("curve_mode = \"lightness\""));

        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.data_file_path().unwrap(),
            temp_dir.path().join("colors.json")
        );
    }

    #[test]
    fn test_default_data_file_lives_in_config_dir() {
        let config = Config::new();
        let path = config.data_file_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "palettes.json");
        assert_eq!(path.parent().unwrap(), Config::config_dir().unwrap());
    }
}
