//! Drawing mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether new strokes paint or erase.
///
/// Selected from the tool palette; the mode is copied into each stroke when
/// the stroke starts. Configurable as `drawing.default_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// Paint with the current color (default)
    #[default]
    #[serde(alias = "pen")]
    Ink,
    /// Clear previously drawn content
    #[serde(alias = "eraser")]
    Erase,
}
