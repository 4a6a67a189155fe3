//! Configuration file support for heartview.
//!
//! This module loads the heart style and demo output settings from
//! `~/.config/heartview/config.toml` or an explicit path. If no config file
//! exists, the widget defaults are used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{HeartStyle, OutputConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [heart]
/// size_basis = "width"
/// color = "#FFFF69B4"
/// edge_color = "red"
/// center_x = -0.5
/// center_y = -0.5
/// radius = 0.8
/// stroke_color = [255, 255, 255, 160]
/// stroke_width = 4.0
/// padding = 8.0
///
/// [output]
/// width = 644
/// density = 2.0
/// path = "heart.png"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Heart appearance
    #[serde(default)]
    pub heart: HeartStyle,

    /// Demo output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. The gradient radius is left unclamped.
    ///
    /// Validated ranges:
    /// - `center_x`, `center_y`: -1.0 - 1.0
    /// - `stroke_width`, `padding`: >= 0.0
    /// - `density`: 0.1 - 8.0
    pub fn validate_and_clamp(&mut self) {
        let heart = &mut self.heart;

        if !(-1.0..=1.0).contains(&heart.center_x) {
            log::warn!(
                "Invalid center_x {:.2}, clamping to -1.0-1.0 range",
                heart.center_x
            );
            heart.center_x = heart.center_x.clamp(-1.0, 1.0);
        }

        if !(-1.0..=1.0).contains(&heart.center_y) {
            log::warn!(
                "Invalid center_y {:.2}, clamping to -1.0-1.0 range",
                heart.center_y
            );
            heart.center_y = heart.center_y.clamp(-1.0, 1.0);
        }

        if heart.stroke_width < 0.0 {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.0",
                heart.stroke_width
            );
            heart.stroke_width = 0.0;
        }

        if heart.padding < 0.0 {
            log::warn!("Invalid padding {:.1}, clamping to 0.0", heart.padding);
            heart.padding = 0.0;
        }

        if !(0.1..=8.0).contains(&self.output.density) {
            log::warn!(
                "Invalid density {:.2}, clamping to 0.1-8.0 range",
                self.output.density
            );
            self.output.density = self.output.density.clamp(0.1, 8.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("heartview");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a config document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
