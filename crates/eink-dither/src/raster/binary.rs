//! Two-level raster produced by dithering.

use crate::api::{DitherError, Stage};

/// Value of a pixel that receives ink.
pub const INK: u8 = 255;

/// Value of a pixel left at the panel's white rest state.
pub const PAPER: u8 = 0;

/// A dithered raster whose pixels are all exactly [`PAPER`] or [`INK`].
///
/// The invariant is enforced at construction: the ditherer builds it
/// directly, and [`BinaryRaster::new`] validates external buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRaster {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl BinaryRaster {
    /// Wrap and validate a row-major two-level buffer.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::BufferLength {
                stage: Stage::Dither,
                expected,
                actual: pixels.len(),
            });
        }
        if let Some(index) = pixels.iter().position(|&p| p != PAPER && p != INK) {
            return Err(DitherError::NonBinaryPixel {
                index,
                value: pixels[index],
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build from a buffer the ditherer has just quantized.
    pub(crate) fn from_quantized(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        debug_assert!(pixels.iter().all(|&p| p == PAPER || p == INK));
        Self {
            pixels,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_two_levels() {
        let raster = BinaryRaster::new(vec![0, 255, 255, 0], 2, 2).unwrap();
        assert_eq!(raster.pixels(), &[PAPER, INK, INK, PAPER]);
        assert_eq!((raster.width(), raster.height()), (2, 2));
    }

    #[test]
    fn test_new_rejects_intermediate_value() {
        let err = BinaryRaster::new(vec![0, 255, 128, 0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            DitherError::NonBinaryPixel {
                index: 2,
                value: 128
            }
        );
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = BinaryRaster::new(vec![0; 3], 2, 2).unwrap_err();
        assert_eq!(err.stage(), Stage::Dither);
    }
}
