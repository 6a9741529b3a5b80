//! Configuration file support for hairsketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/hairsketch/config.toml`. Settings include drawing defaults,
//! the fallback view size, flattening quality, and stroke document storage.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ResamplingFilter, SessionCompression, SessionStorageMode};
pub use types::{CanvasConfig, ComposeConfig, DrawingConfig, SessionConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 10.0
/// eraser_width_multiplier = 2.0
///
/// [canvas]
/// width = 1080
/// height = 1920
///
/// [compose]
/// resampling = "good"
///
/// [session]
/// max_strokes = 10000
/// compress = "auto"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing style defaults (color, width, eraser size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Fallback drawing view size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Flattening options
    #[serde(default)]
    pub compose: ComposeConfig,

    /// Stroke limits and document storage
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `eraser_width_multiplier`: 1.0 - 10.0
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        // Width: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 100.0);
        }

        // Eraser multiplier: 1.0 - 10.0
        if !(1.0..=10.0).contains(&self.drawing.eraser_width_multiplier) {
            log::warn!(
                "Invalid eraser_width_multiplier {:.1}, clamping to 1.0-10.0 range",
                self.drawing.eraser_width_multiplier
            );
            self.drawing.eraser_width_multiplier =
                self.drawing.eraser_width_multiplier.clamp(1.0, 10.0);
        }

        // Canvas size: 1 - 8192
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }
        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/hairsketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("hairsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
