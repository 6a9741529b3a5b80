//! Off-screen drawing layer sized to the view bounds.

use super::image::{Image, ImageError};
use log::debug;

/// Pixel buffer the compositor rasterises strokes into.
///
/// Sized to the drawing view; a resize allocates a fresh, transparent buffer
/// and drops whatever was drawn before. A zero-sized surface is valid and
/// simply renders nothing.
pub struct Surface {
    inner: cairo::ImageSurface,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Result<Self, ImageError> {
        let inner =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width.max(0), height.max(0))?;
        Ok(Self { inner })
    }

    /// Reallocates the buffer for new view bounds.
    ///
    /// Same-size calls keep the current buffer.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), ImageError> {
        if self.dimensions() == (width.max(0), height.max(0)) {
            return Ok(());
        }
        debug!(
            "Resizing drawing surface {:?} -> {}x{}",
            self.dimensions(),
            width,
            height
        );
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.inner.width()
    }

    pub fn height(&self) -> i32 {
        self.inner.height()
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Opens a drawing context on the buffer.
    pub fn context(&self) -> Result<cairo::Context, ImageError> {
        Ok(cairo::Context::new(&self.inner)?)
    }

    pub(crate) fn cairo_surface(&self) -> &cairo::ImageSurface {
        &self.inner
    }

    /// Copies the current pixels out.
    pub fn to_image(&self) -> Result<Image, ImageError> {
        // `ImageSurface::data` needs the only reference, so paint into a private copy.
        let copy = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width(), self.height())?;
        {
            let ctx = cairo::Context::new(&copy)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.inner, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Image::from_surface(copy)
    }
}
