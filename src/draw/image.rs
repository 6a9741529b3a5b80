//! Owned raster images used for backgrounds and flattened output.

use std::fmt;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised while moving pixels between [`Image`]s and cairo surfaces.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encode/decode failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// An ARGB32 (premultiplied, native-endian) pixel buffer.
///
/// Layout matches `cairo::Format::ARgb32`, so conversion to and from
/// cairo surfaces is a plain copy.
#[derive(Clone, PartialEq)]
pub struct Image {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Creates a fully transparent image.
    pub fn new(width: i32, height: i32) -> Result<Self, ImageError> {
        if width <= 0 || height <= 0 {
            return Err(ImageError::InvalidDimensions { width, height });
        }
        let stride = cairo::Format::ARgb32.stride_for_width(width as u32)?;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0; stride as usize * height as usize],
        })
    }

    /// Creates an image filled with one opaque or translucent color.
    pub fn filled(width: i32, height: i32, color: super::Color) -> Result<Self, ImageError> {
        let surface = Self::new(width, height)?.to_surface()?;
        {
            let ctx = cairo::Context::new(&surface)?;
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint()?;
        }
        Self::from_surface(surface)
    }

    /// Copies the pixels out of an image surface.
    ///
    /// Surfaces in formats other than ARGB32 are converted by painting them
    /// onto a fresh ARGB32 surface first.
    pub fn from_surface(surface: cairo::ImageSurface) -> Result<Self, ImageError> {
        let mut surface = if surface.format() == cairo::Format::ARgb32 {
            surface
        } else {
            let converted = cairo::ImageSurface::create(
                cairo::Format::ARgb32,
                surface.width(),
                surface.height(),
            )?;
            {
                let ctx = cairo::Context::new(&converted)?;
                ctx.set_source_surface(&surface, 0.0, 0.0)?;
                ctx.paint()?;
            }
            converted
        };

        surface.flush();
        let width = surface.width();
        let height = surface.height();
        if width <= 0 || height <= 0 {
            return Err(ImageError::InvalidDimensions { width, height });
        }
        let stride = surface.stride();
        let data = surface.data()?.to_vec();

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Creates a cairo surface holding a copy of the pixels.
    pub fn to_surface(&self) -> Result<cairo::ImageSurface, ImageError> {
        Ok(cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?)
    }

    /// Decodes a PNG stream.
    pub fn read_png<R: Read>(reader: &mut R) -> Result<Self, ImageError> {
        let surface = cairo::ImageSurface::create_from_png(reader)?;
        Self::from_surface(surface)
    }

    /// Encodes the image as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), ImageError> {
        self.to_surface()?.write_to_png(writer)?;
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns the premultiplied `0xAARRGGBB` value at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride as usize + x as usize * 4;
        let bytes: [u8; 4] = self.data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Alpha channel at `(x, y)`.
    pub fn alpha(&self, x: i32, y: i32) -> Option<u8> {
        self.pixel(x, y).map(|argb| (argb >> 24) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn new_image_is_transparent() {
        let image = Image::new(4, 3).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.pixel(3, 2), Some(0));
        assert_eq!(image.pixel(4, 0), None);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Image::new(0, 10),
            Err(ImageError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn filled_image_reports_color() {
        let image = Image::filled(2, 2, RED).unwrap();
        assert_eq!(image.pixel(1, 1), Some(0xFFFF0000));
    }

    #[test]
    fn png_round_trip_keeps_pixels() {
        let image = Image::filled(5, 7, BLUE).unwrap();
        let mut encoded = Vec::new();
        image.write_png(&mut encoded).unwrap();

        let decoded = Image::read_png(&mut encoded.as_slice()).unwrap();
        assert_eq!(decoded.dimensions(), (5, 7));
        assert_eq!(decoded.pixel(4, 6), Some(0xFF0000FF));
    }
}
