//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use hairsketch::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_argb(), 0xFFFF0000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Unpacks a `0xAARRGGBB` value, the layout color pickers hand out.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f64 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Packs the color into `0xAARRGGBB`, rounding each channel.
    pub fn to_argb(self) -> u32 {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        channel(self.a) << 24 | channel(self.r) << 16 | channel(self.g) << 8 | channel(self.b)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined cyan color (R=0.0, G=1.0, B=1.0)
pub const CYAN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined magenta color (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default ink.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trips_through_components() {
        let packed = 0x80FF4020;
        let color = Color::from_argb(packed);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.to_argb(), packed);
    }

    #[test]
    fn from_rgb8_is_opaque() {
        let color = Color::from_rgb8(0, 128, 255);
        assert_eq!(color.a, 1.0);
        assert_eq!(color.to_argb(), 0xFF0080FF);
    }

    #[test]
    fn to_argb_clamps_out_of_range_components() {
        let color = Color::new(2.0, -1.0, 0.0, 1.0);
        assert_eq!(color.to_argb(), 0xFFFF0000);
    }
}
