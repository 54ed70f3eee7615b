//! Continuous-tone ink intensity raster.

use crate::api::{DitherError, Stage};

/// An 8-bit ink intensity raster.
///
/// `0` means "no ink" (the panel's white rest state) and `255` means full
/// ink. Produced by [`flatten_rgba`](crate::preprocess::flatten_rgba) and
/// consumed by a [`Dither`](crate::dither::Dither) implementation.
///
/// # Example
///
/// ```
/// use eink_dither::GrayRaster;
///
/// let raster = GrayRaster::new(vec![0, 64, 128, 255], 2, 2).unwrap();
/// assert_eq!(raster.pixels()[3], 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayRaster {
    /// Wrap a row-major intensity buffer.
    ///
    /// Fails with [`DitherError::BufferLength`] if `pixels.len()` is not
    /// `width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::BufferLength {
                stage: Stage::Flatten,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A raster with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            pixels: vec![value; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, returning the buffer and its dimensions.
    pub fn into_parts(self) -> (Vec<u8>, usize, usize) {
        (self.pixels, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = GrayRaster::new(vec![0; 5], 2, 2).unwrap_err();
        assert_eq!(
            err,
            DitherError::BufferLength {
                stage: Stage::Flatten,
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_empty_raster_is_valid() {
        let raster = GrayRaster::new(Vec::new(), 0, 0).unwrap();
        assert_eq!(raster.width(), 0);
        assert!(raster.pixels().is_empty());
    }

    #[test]
    fn test_filled() {
        let raster = GrayRaster::filled(3, 2, 42);
        assert_eq!(raster.pixels(), &[42; 6]);
        assert_eq!((raster.width(), raster.height()), (3, 2));
    }

    #[test]
    fn test_into_parts() {
        let raster = GrayRaster::new(vec![1, 2, 3], 3, 1).unwrap();
        let (pixels, w, h) = raster.into_parts();
        assert_eq!(pixels, vec![1, 2, 3]);
        assert_eq!((w, h), (3, 1));
    }
}
