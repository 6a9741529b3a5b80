//! Drawing state machine and canvas state management.

use crate::config::Config;
use crate::draw::{ActiveStroke, ImageError, Resampling, StrokeList, Surface};
use crate::input::style::StyleState;

/// Current stroke recording state.
///
/// `Idle` until a gesture starts; `Drawing` holds the stroke being recorded
/// until the gesture ends and the stroke is sealed into the list.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture is in progress
    Drawing {
        /// Points and style captured so far
        stroke: ActiveStroke,
    },
}

/// The drawing view: style, recorded strokes and the layer they render into.
///
/// Owns its stroke list exclusively. The session context is passed in by the
/// caller wherever strokes need to be exported or restored.
pub struct Canvas {
    /// Style applied to strokes started from now on
    pub style: StyleState,
    /// Stroke recording state machine
    pub state: DrawingState,
    /// Sealed strokes in drawing order
    pub(crate) strokes: StrokeList,
    /// Drawing layer, sized to the view
    pub(crate) surface: Surface,
    /// Whether the layer needs to be re-rendered
    pub needs_redraw: bool,
    /// Maximum number of strokes kept (0 = unlimited)
    pub max_strokes: usize,
    /// Filter used when scaling the layer onto a background
    pub resampling: Resampling,
}

impl Canvas {
    /// Creates an empty canvas for a view of `width` x `height` pixels.
    pub fn new(width: i32, height: i32, style: StyleState) -> Result<Self, ImageError> {
        Ok(Self {
            style,
            state: DrawingState::Idle,
            strokes: StrokeList::new(),
            surface: Surface::new(width, height)?,
            needs_redraw: true,
            max_strokes: 0,
            resampling: Resampling::default(),
        })
    }

    /// Creates a canvas using the drawing, canvas and compose settings from `config`.
    ///
    /// The style starts in `drawing.default_mode`.
    pub fn from_config(config: &Config) -> Result<Self, ImageError> {
        let mut style = StyleState::new(
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
        )
        .with_eraser_multiplier(config.drawing.eraser_width_multiplier);
        style.set_mode(config.drawing.default_mode);

        let mut canvas = Self::new(config.canvas.width, config.canvas.height, style)?;
        canvas.max_strokes = config.session.max_strokes;
        canvas.resampling = config.compose.resampling.into();
        Ok(canvas)
    }

    /// Sealed strokes in drawing order. In-progress strokes are not included.
    pub fn strokes(&self) -> &StrokeList {
        &self.strokes
    }

    /// The stroke currently being recorded, if a gesture is in progress.
    pub fn current_stroke(&self) -> Option<&ActiveStroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Updates the layer size after the view was laid out again.
    ///
    /// The previous pixels are discarded; strokes are kept and re-rendered
    /// at their original coordinates on the next redraw.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), ImageError> {
        self.surface.resize(width, height)?;
        self.needs_redraw = true;
        Ok(())
    }
}
