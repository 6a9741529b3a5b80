//! Configuration enum types.

use crate::draw::{Color, color::BLACK, flatten::Resampling};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [120, 72, 30]  # Chestnut
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, cyan, magenta, white, black, brown, blonde
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped using `util::name_to_color()`. Unknown names
    /// default to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Resampling filter used when scaling the drawing onto the background.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ResamplingFilter {
    /// Balanced quality (default)
    #[default]
    Good,
    /// Highest quality, slowest
    Best,
    /// Plain bilinear interpolation
    Bilinear,
}

impl From<ResamplingFilter> for Resampling {
    fn from(filter: ResamplingFilter) -> Self {
        match filter {
            ResamplingFilter::Good => Resampling::Good,
            ResamplingFilter::Best => Resampling::Best,
            ResamplingFilter::Bilinear => Resampling::Bilinear,
        }
    }
}

/// Where stroke documents are stored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStorageMode {
    /// `$XDG_DATA_HOME/hairsketch`, falling back to the config directory
    #[default]
    Auto,
    /// Next to the configuration file
    Config,
    /// `session.custom_directory`
    Custom,
}

/// Compression for stroke documents.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SessionCompression {
    /// Compress when the payload exceeds `auto_compress_threshold_kb`
    #[default]
    Auto,
    On,
    Off,
}
