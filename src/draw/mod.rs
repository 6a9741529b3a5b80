//! Stroke model and Cairo-based compositing.
//!
//! This module defines the core drawing types used for sketching:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: a sealed freehand polyline with its captured [`StrokeStyle`]
//! - [`StrokeList`]: ordered container for all strokes of a drawing
//! - [`Surface`] / [`Image`]: the drawing layer and owned raster images
//! - [`render`] and [`flatten`]: rasterisation and background merging

pub mod color;
pub mod flatten;
pub mod frame;
pub mod image;
pub mod palette;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use flatten::{ComposeError, Resampling, flatten};
pub use frame::StrokeList;
pub use image::{Image, ImageError};
pub use render::{render, render_stroke, render_strokes};
pub use stroke::{ActiveStroke, Point, Stroke, StrokeStyle};
pub use surface::Surface;

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW};
