//! Small parsing helpers shared by the configuration layer and the CLI.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "cyan", "magenta", "white", "black"
/// - "brown", "blonde" (common hair tones)
///
/// # Returns
/// - `Some(Color)` if the name matches a known color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        "magenta" => Some(MAGENTA),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "brown" => Some(Color::from_rgb8(0x6B, 0x42, 0x26)),
        "blonde" | "blond" => Some(Color::from_rgb8(0xE6, 0xC2, 0x8A)),
        _ => None,
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Parses a `WIDTHxHEIGHT` string such as `400x300`.
///
/// Both components must be positive integers. Returns `None` otherwise.
pub fn parse_dimensions(raw: &str) -> Option<(i32, i32)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let width: i32 = w.trim().parse().ok()?;
    let height: i32 = h.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}
