//! Merging the drawing layer with a background image.

use super::image::{Image, ImageError};
use super::surface::Surface;
use log::debug;
use thiserror::Error;

/// Errors that can occur while producing a flattened image.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("No background image available (no camera frame or snapshot)")]
    MissingBackground,

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Resampling used when scaling the drawing layer to the background size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampling {
    /// Cairo's `Good` filter (bilinear-class quality)
    #[default]
    Good,
    /// Cairo's `Best` filter
    Best,
    /// Plain bilinear interpolation
    Bilinear,
}

impl Resampling {
    fn filter(self) -> cairo::Filter {
        match self {
            Resampling::Good => cairo::Filter::Good,
            Resampling::Best => cairo::Filter::Best,
            Resampling::Bilinear => cairo::Filter::Bilinear,
        }
    }
}

/// Draws `background`, then `surface` stretched to the background size on top.
///
/// The output always has the background's dimensions. An empty surface
/// contributes nothing and the result is a copy of the background.
///
/// # Errors
/// Returns [`ComposeError::MissingBackground`] when no background is given;
/// nothing is produced in that case.
pub fn flatten(
    surface: &Surface,
    background: Option<&Image>,
    resampling: Resampling,
) -> Result<Image, ComposeError> {
    let background = background.ok_or(ComposeError::MissingBackground)?;
    let (width, height) = background.dimensions();

    let output = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&output)?;

        let bg_surface = background.to_surface()?;
        ctx.set_source_surface(&bg_surface, 0.0, 0.0)?;
        ctx.paint()?;

        if surface.is_empty() {
            debug!("Drawing surface is empty; flattened output is the background only");
        } else {
            let scale_x = width as f64 / surface.width() as f64;
            let scale_y = height as f64 / surface.height() as f64;

            ctx.scale(scale_x, scale_y);
            ctx.set_source_surface(surface.cairo_surface(), 0.0, 0.0)?;
            // Clamp at the layer edge so border pixels are not blended with transparency
            ctx.source().set_extend(cairo::Extend::Pad);
            ctx.source().set_filter(resampling.filter());
            ctx.paint()?;
        }
    }

    Ok(Image::from_surface(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, GREEN, RED, WHITE};
    use crate::draw::{ActiveStroke, Point, StrokeList, StrokeStyle, render};

    #[test]
    fn output_matches_background_dimensions() {
        let surface = Surface::new(400, 300).unwrap();
        let background = Image::filled(1920, 1080, WHITE).unwrap();

        let output = flatten(&surface, Some(&background), Resampling::Good).unwrap();
        assert_eq!(output.dimensions(), (1920, 1080));
    }

    #[test]
    fn missing_background_is_reported() {
        let surface = Surface::new(10, 10).unwrap();
        assert!(matches!(
            flatten(&surface, None, Resampling::Good),
            Err(ComposeError::MissingBackground)
        ));
    }

    #[test]
    fn drawing_is_scaled_onto_background() {
        let surface = Surface::new(100, 100).unwrap();
        let mut stroke = ActiveStroke::begin(
            Point::new(0.0, 50.0),
            StrokeStyle::Ink {
                color: RED,
                width: 20.0,
            },
        );
        stroke.push(Point::new(100.0, 50.0));
        let strokes: StrokeList = [stroke.seal()].into_iter().collect();
        render(&surface, &strokes, None);

        let background = Image::filled(400, 200, GREEN).unwrap();
        let output = flatten(&surface, Some(&background), Resampling::Good).unwrap();

        // Stroke band covers y 40..60 on the surface, 80..120 after scaling.
        assert_eq!(output.pixel(200, 100), Some(0xFFFF0000));
        assert_eq!(output.pixel(200, 20), Some(0xFF00FF00));
    }

    #[test]
    fn layer_edges_stay_opaque_when_upscaled() {
        let surface = Surface::new(10, 10).unwrap();
        {
            let ctx = surface.context().unwrap();
            ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }

        let background = Image::filled(40, 40, GREEN).unwrap();
        for resampling in [Resampling::Good, Resampling::Best, Resampling::Bilinear] {
            let output = flatten(&surface, Some(&background), resampling).unwrap();
            assert_eq!(output.pixel(0, 0), Some(0xFFFF0000), "{resampling:?}");
            assert_eq!(output.pixel(39, 39), Some(0xFFFF0000), "{resampling:?}");
            assert_eq!(output.pixel(0, 39), Some(0xFFFF0000), "{resampling:?}");
        }
    }

    #[test]
    fn erased_regions_show_background() {
        let surface = Surface::new(50, 50).unwrap();
        let mut ink = ActiveStroke::begin(
            Point::new(0.0, 25.0),
            StrokeStyle::Ink {
                color: BLACK,
                width: 10.0,
            },
        );
        ink.push(Point::new(50.0, 25.0));
        let mut erase =
            ActiveStroke::begin(Point::new(25.0, 0.0), StrokeStyle::Erase { width: 20.0 });
        erase.push(Point::new(25.0, 50.0));
        let strokes: StrokeList = [ink.seal(), erase.seal()].into_iter().collect();
        render(&surface, &strokes, None);

        let background = Image::filled(50, 50, WHITE).unwrap();
        let output = flatten(&surface, Some(&background), Resampling::Best).unwrap();

        assert_eq!(output.pixel(25, 25), Some(0xFFFFFFFF));
        assert_eq!(output.pixel(5, 25), Some(0xFF000000));
    }

    #[test]
    fn empty_surface_yields_background_copy() {
        let surface = Surface::new(0, 0).unwrap();
        let background = Image::filled(8, 8, GREEN).unwrap();
        let output = flatten(&surface, Some(&background), Resampling::Bilinear).unwrap();
        assert_eq!(output, background);
    }
}
