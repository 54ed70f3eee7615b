//! Error diffusion dithering to two levels.
//!
//! # Architecture
//!
//! Dithering algorithms implement the [`Dither`] trait, which consumes a
//! [`GrayRaster`] and returns a [`BinaryRaster`]. Error diffusion itself is
//! driven by a [`Kernel`] table through [`dither_with_kernel`], so the
//! quantizer and the clamped integer arithmetic live in one place.
//!
//! # Arithmetic
//!
//! The working buffer holds `u8` intensities. After a pixel is quantized its
//! error is pushed to each in-bounds neighbor as
//!
//! ```text
//! neighbor = floor(clamp(neighbor * divisor + error * weight, 0, 255 * divisor) / divisor)
//! ```
//!
//! which is exactly "add `error * weight / divisor`, clamp to [0, 255],
//! truncate to 8 bits". Every intermediate fits in `i32`, so there is no
//! overflow and no platform-dependent rounding.
//!
//! # Example
//!
//! ```
//! use eink_dither::{Dither, FloydSteinberg, GrayRaster};
//!
//! let gray = GrayRaster::filled(4, 4, 128);
//! let binary = FloydSteinberg.dither(gray);
//!
//! assert!(binary.pixels().iter().all(|&p| p == 0 || p == 255));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use crate::raster::{BinaryRaster, GrayRaster, INK, PAPER};

/// Pixels at or above this value quantize to ink.
///
/// A pixel of exactly 128 is ink; existing firmware assets depend on it.
pub const THRESHOLD: u8 = 128;

/// A two-level dithering algorithm.
pub trait Dither {
    /// Quantize `image` to [`PAPER`]/[`INK`].
    ///
    /// Takes the raster by value: the algorithm owns the working buffer for
    /// the duration of the pass.
    fn dither(&self, image: GrayRaster) -> BinaryRaster;
}

/// Quantize one pixel.
#[inline]
pub fn quantize(value: u8) -> u8 {
    if value < THRESHOLD {
        PAPER
    } else {
        INK
    }
}

/// Add `error * weight / divisor` to `value`, clamped to [0, 255] and
/// truncated.
#[inline]
fn diffuse(value: u8, error: i32, weight: u8, divisor: i32) -> u8 {
    let scaled = i32::from(value) * divisor + error * i32::from(weight);
    (scaled.clamp(0, 255 * divisor) / divisor) as u8
}

/// Single forward pass of error diffusion with the given kernel.
///
/// Pixels are visited row-major, left to right, top to bottom. Neighbors
/// outside the raster are skipped; there is no wraparound.
pub fn dither_with_kernel(image: GrayRaster, kernel: &Kernel) -> BinaryRaster {
    let (mut buffer, width, height) = image.into_parts();
    let divisor = i32::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = buffer[idx];
            let new = quantize(old);
            buffer[idx] = new;

            let error = i32::from(old) - i32::from(new);
            if error == 0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as isize + dx as isize;
                let ny = y as isize + dy as isize;
                if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                    continue;
                }
                let n = ny as usize * width + nx as usize;
                buffer[n] = diffuse(buffer[n], error, weight, divisor);
            }
        }
    }

    BinaryRaster::from_quantized(buffer, width, height)
}
