//! Active drawing style (color, mode, width).

use super::observable::Observable;
use super::tool::DrawingMode;
use crate::draw::{Color, StrokeStyle};

/// Width multiplier applied to erase strokes unless configured otherwise.
pub const DEFAULT_ERASER_WIDTH_MULTIPLIER: f64 = 2.0;

/// Current style settings, read when a stroke starts.
///
/// Every setter updates exactly one field and notifies that field's
/// subscriber before returning. Values are stored as given: a width of zero
/// or less is not rejected here.
#[derive(Debug)]
pub struct StyleState {
    color: Observable<Color>,
    mode: Observable<DrawingMode>,
    width: Observable<f64>,
    last_width: f64,
    eraser_width_multiplier: f64,
}

impl StyleState {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color: Observable::new(color),
            mode: Observable::new(DrawingMode::Ink),
            width: Observable::new(width),
            last_width: width,
            eraser_width_multiplier: DEFAULT_ERASER_WIDTH_MULTIPLIER,
        }
    }

    pub fn with_eraser_multiplier(mut self, multiplier: f64) -> Self {
        self.eraser_width_multiplier = multiplier;
        self
    }

    pub fn color(&self) -> Color {
        *self.color.get()
    }

    pub fn mode(&self) -> DrawingMode {
        *self.mode.get()
    }

    pub fn width(&self) -> f64 {
        *self.width.get()
    }

    /// Ink width remembered across an erase/ink toggle.
    pub fn last_width(&self) -> f64 {
        self.last_width
    }

    pub fn eraser_width_multiplier(&self) -> f64 {
        self.eraser_width_multiplier
    }

    pub fn set_color(&mut self, color: Color) {
        log::debug!("Style color -> {:#010x}", color.to_argb());
        self.color.set(color);
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        log::debug!("Style mode -> {:?}", mode);
        self.mode.set(mode);
    }

    pub fn set_width(&mut self, width: f64) {
        log::debug!("Style width -> {:.1}", width);
        self.width.set(width);
    }

    pub fn set_last_width(&mut self, width: f64) {
        self.last_width = width;
    }

    pub fn on_color_change(&mut self, subscriber: impl FnMut(&Color) + 'static) {
        self.color.subscribe(subscriber);
    }

    pub fn on_mode_change(&mut self, subscriber: impl FnMut(&DrawingMode) + 'static) {
        self.mode.subscribe(subscriber);
    }

    pub fn on_width_change(&mut self, subscriber: impl FnMut(&f64) + 'static) {
        self.width.subscribe(subscriber);
    }

    /// Style a stroke starting now would capture.
    ///
    /// Erase strokes are widened by the eraser multiplier.
    pub fn snapshot(&self) -> StrokeStyle {
        match self.mode() {
            DrawingMode::Ink => StrokeStyle::Ink {
                color: self.color(),
                width: self.width(),
            },
            DrawingMode::Erase => StrokeStyle::Erase {
                width: self.width() * self.eraser_width_multiplier,
            },
        }
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(crate::draw::BLACK, 10.0)
    }
}
