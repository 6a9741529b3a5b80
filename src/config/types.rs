//! Configuration type definitions.

use super::enums::{ColorSpec, ResamplingFilter, SessionCompression, SessionStorageMode};
use crate::input::DrawingMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the style new canvases start with. The style can be changed at
/// runtime from the palette.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default ink color - either a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Factor applied to the stroke width while erasing (valid range: 1.0 - 10.0)
    #[serde(default = "default_eraser_width_multiplier")]
    pub eraser_width_multiplier: f64,

    /// Mode new canvases start in: `ink` (alias `pen`) or `erase` (alias `eraser`)
    #[serde(default)]
    pub default_mode: DrawingMode,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            eraser_width_multiplier: default_eraser_width_multiplier(),
            default_mode: DrawingMode::default(),
        }
    }
}

/// Drawing view size used when no live view reports its bounds (e.g. the CLI).
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// View width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// View height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Flattening options.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ComposeConfig {
    /// Filter used when scaling the drawing to the background size
    #[serde(default)]
    pub resampling: ResamplingFilter,
}

/// Stroke limits and stroke document storage.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SessionConfig {
    /// Storage location for stroke documents
    #[serde(default)]
    pub storage: SessionStorageMode,

    /// Directory used when `storage = "custom"`
    #[serde(default)]
    pub custom_directory: Option<String>,

    /// Maximum strokes kept per drawing (0 = unlimited)
    #[serde(default = "default_max_strokes")]
    pub max_strokes: usize,

    /// Largest stroke document that will be written or read, in MiB
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// Compression for stroke documents
    #[serde(default)]
    pub compress: SessionCompression,

    /// Payload size at which `compress = "auto"` starts compressing, in KiB
    #[serde(default = "default_auto_compress_threshold_kb")]
    pub auto_compress_threshold_kb: u64,

    /// Number of backup files kept when overwriting a document
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage: SessionStorageMode::default(),
            custom_directory: None,
            max_strokes: default_max_strokes(),
            max_file_size_mb: default_max_file_size_mb(),
            compress: SessionCompression::default(),
            auto_compress_threshold_kb: default_auto_compress_threshold_kb(),
            backup_retention: default_backup_retention(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    10.0
}

fn default_eraser_width_multiplier() -> f64 {
    2.0
}

fn default_canvas_width() -> i32 {
    1080
}

fn default_canvas_height() -> i32 {
    1920
}

fn default_max_strokes() -> usize {
    10_000
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_auto_compress_threshold_kb() -> u64 {
    100
}

fn default_backup_retention() -> usize {
    1
}
