//! Stroke definitions for freehand sketches.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A point in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// How a stroke is composited onto the surface.
///
/// Ink paints its color; erase punches transparency into whatever was
/// drawn before it. The variant is captured once when the stroke starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StrokeStyle {
    /// Colored stroke painted over existing content
    Ink {
        /// Stroke color
        color: Color,
        /// Line width in pixels
        width: f64,
    },
    /// Clearing stroke that removes earlier content beneath it
    Erase {
        /// Line width in pixels
        width: f64,
    },
}

impl StrokeStyle {
    /// Line width regardless of mode.
    pub fn width(&self) -> f64 {
        match self {
            StrokeStyle::Ink { width, .. } | StrokeStyle::Erase { width } => *width,
        }
    }

    /// Ink color, `None` for erase strokes.
    pub fn color(&self) -> Option<Color> {
        match self {
            StrokeStyle::Ink { color, .. } => Some(*color),
            StrokeStyle::Erase { .. } => None,
        }
    }

    pub fn is_erase(&self) -> bool {
        matches!(self, StrokeStyle::Erase { .. })
    }
}

/// A sealed freehand stroke.
///
/// Points are kept in drawing order. A `Stroke` is only produced by
/// [`ActiveStroke::seal`] (or deserialisation), and has no mutators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// A stroke still receiving points from an ongoing gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveStroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl ActiveStroke {
    /// Starts a stroke at `origin` with a copy of the given style.
    pub fn begin(origin: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![origin],
            style,
        }
    }

    /// Appends a point. Near-duplicate points are kept as delivered.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Finishes the stroke, after which no more points can be added.
    pub fn seal(self) -> Stroke {
        Stroke {
            points: self.points,
            style: self.style,
        }
    }
}
