//! Spectrum palette used by the color picker strip.
//!
//! The picker shows six horizontal gradient lines. A touch picks a line by its
//! vertical offset and a color by linear interpolation along that line.

use super::color::{BLACK, BLUE, CYAN, Color, GREEN, MAGENTA, RED, WHITE, YELLOW};

/// Number of gradient lines in the picker.
pub const LINE_COUNT: usize = 6;

/// Line selected before any interaction (the grayscale line).
pub const DEFAULT_LINE: usize = 5;

/// Samples taken along a line when looking up the closest position.
const SEARCH_STEPS: u32 = 100;

const ORANGE_STOP: Color = rgb(255, 128, 0);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f64 / 255.0,
        g: g as f64 / 255.0,
        b: b as f64 / 255.0,
        a: 1.0,
    }
}

const RED_TO_ORANGE: [Color; 5] = [
    RED,
    rgb(255, 32, 0),
    rgb(255, 64, 0),
    rgb(255, 96, 0),
    ORANGE_STOP,
];

const ORANGE_TO_YELLOW: [Color; 5] = [
    ORANGE_STOP,
    rgb(255, 160, 0),
    rgb(255, 192, 0),
    rgb(255, 224, 0),
    YELLOW,
];

const YELLOW_TO_GREEN: [Color; 5] = [
    YELLOW,
    rgb(192, 255, 0),
    rgb(128, 255, 0),
    rgb(64, 255, 0),
    GREEN,
];

const GREEN_TO_CYAN: [Color; 5] = [
    GREEN,
    rgb(0, 255, 64),
    rgb(0, 255, 128),
    rgb(0, 255, 192),
    CYAN,
];

const CYAN_TO_RED: [Color; 9] = [
    CYAN,
    rgb(0, 128, 255),
    BLUE,
    rgb(64, 0, 255),
    rgb(128, 0, 255),
    rgb(192, 0, 255),
    MAGENTA,
    rgb(255, 0, 128),
    RED,
];

const GRAYSCALE: [Color; 9] = [
    BLACK,
    rgb(32, 32, 32),
    rgb(64, 64, 64),
    rgb(96, 96, 96),
    rgb(128, 128, 128),
    rgb(160, 160, 160),
    rgb(192, 192, 192),
    rgb(224, 224, 224),
    WHITE,
];

/// Color stops of each gradient line, top to bottom.
pub const LINES: [&[Color]; LINE_COUNT] = [
    &RED_TO_ORANGE,
    &ORANGE_TO_YELLOW,
    &YELLOW_TO_GREEN,
    &GREEN_TO_CYAN,
    &CYAN_TO_RED,
    &GRAYSCALE,
];

/// Vertical layout of the gradient lines, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerGeometry {
    pub line_height: f64,
    pub line_spacing: f64,
    pub top_padding: f64,
}

impl Default for PickerGeometry {
    fn default() -> Self {
        Self {
            line_height: 10.0,
            line_spacing: 2.0,
            top_padding: 2.0,
        }
    }
}

/// Returns the line under a vertical offset, clamped to the available lines.
pub fn line_at(y: f64, geometry: &PickerGeometry) -> usize {
    let pitch = geometry.line_height + geometry.line_spacing;
    (0..LINE_COUNT - 1)
        .find(|&index| y < geometry.top_padding + index as f64 * pitch + geometry.line_height)
        .unwrap_or(LINE_COUNT - 1)
}

/// Interpolates the color at `position` (0.0 = left edge, 1.0 = right edge).
///
/// Channels are interpolated linearly and truncated to 8 bits.
/// Unknown line indices fall back to the grayscale line.
pub fn color_at(line: usize, position: f64) -> Color {
    interpolate(stops(line), position)
}

/// Finds the position on `line` whose color is closest to `target`.
///
/// Scans 101 evenly spaced samples and compares squared RGB distance.
pub fn nearest_position(line: usize, target: Color) -> f64 {
    let colors = stops(line);
    let target = target.to_argb();

    let mut best_position = 0.0;
    let mut best_distance = u32::MAX;
    for step in 0..=SEARCH_STEPS {
        let position = step as f64 / SEARCH_STEPS as f64;
        let distance = rgb_distance(interpolate(colors, position).to_argb(), target);
        if distance < best_distance {
            best_distance = distance;
            best_position = position;
        }
    }
    best_position
}

fn stops(line: usize) -> &'static [Color] {
    LINES.get(line).copied().unwrap_or(LINES[DEFAULT_LINE])
}

fn interpolate(colors: &[Color], position: f64) -> Color {
    let Some(last) = colors.last() else {
        return BLACK;
    };

    let scaled = position.clamp(0.0, 1.0) * (colors.len() - 1) as f64;
    let index = scaled as usize;
    if index >= colors.len() - 1 {
        return *last;
    }
    let fraction = scaled - index as f64;

    let start = colors[index].to_argb();
    let end = colors[index + 1].to_argb();
    let mix = |shift: u32| {
        let a = ((start >> shift) & 0xFF) as f64;
        let b = ((end >> shift) & 0xFF) as f64;
        (a + fraction * (b - a)) as u32
    };

    Color::from_argb(mix(24) << 24 | mix(16) << 16 | mix(8) << 8 | mix(0))
}

fn rgb_distance(a: u32, b: u32) -> u32 {
    [16u32, 8, 0]
        .into_iter()
        .map(|shift| {
            let delta = ((a >> shift) & 0xFF) as i32 - ((b >> shift) & 0xFF) as i32;
            (delta * delta) as u32
        })
        .sum()
}
