//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::raster::{BinaryRaster, GrayRaster};

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of the
/// quantization error to 4 neighboring pixels:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// The scan is a single left-to-right pass per row (no serpentine), so the
/// result is a pure function of the input raster.
///
/// # Example
///
/// ```
/// use eink_dither::{Dither, FloydSteinberg, GrayRaster};
///
/// let gray = GrayRaster::new(vec![0, 255, 127, 128], 4, 1).unwrap();
/// let binary = FloydSteinberg.dither(gray);
/// assert_eq!(binary.pixels()[0], 0);
/// assert_eq!(binary.pixels()[1], 255);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: GrayRaster) -> BinaryRaster {
        dither_with_kernel(image, &FLOYD_STEINBERG)
    }
}
