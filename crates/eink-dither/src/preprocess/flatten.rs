//! Alpha flattening, luminance and polarity inversion.

use super::gamma::{linear_to_srgb, srgb_to_linear};
use crate::api::{DitherError, Stage};
use crate::raster::GrayRaster;

/// Rec. 709 luma weights.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Composite one 8-bit channel onto white.
///
/// `out = c * a + 255 * (1 - a)` with `a = alpha / 255`, rounded to nearest.
#[inline]
pub fn composite_over_white(channel: u8, alpha: u8) -> u8 {
    let c = u32::from(channel);
    let a = u32::from(alpha);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Rec. 709 luminance of an opaque sRGB pixel.
///
/// The weights apply to linear light; the result is gamma-encoded again
/// and rounded to nearest, so gray input maps to itself.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let linear = |c: u8| srgb_to_linear(f64::from(c) / 255.0);
    let y = LUMA_R * linear(r) + LUMA_G * linear(g) + LUMA_B * linear(b);
    (linear_to_srgb(y.clamp(0.0, 1.0)) * 255.0)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Ink intensity of one RGBA pixel: flatten, luminance, invert.
#[inline]
pub fn ink_intensity(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let luma = luminance(
        composite_over_white(r, a),
        composite_over_white(g, a),
        composite_over_white(b, a),
    );
    255 - luma
}

/// Convert a row-major RGBA8 buffer into an ink intensity raster.
///
/// # Example
///
/// ```
/// use eink_dither::preprocess::flatten_rgba;
///
/// // One opaque black pixel, one fully transparent black pixel
/// let rgba = [0, 0, 0, 255, 0, 0, 0, 0];
/// let gray = flatten_rgba(&rgba, 2, 1).unwrap();
///
/// assert_eq!(gray.pixels(), &[255, 0]);
/// ```
pub fn flatten_rgba(rgba: &[u8], width: usize, height: usize) -> Result<GrayRaster, DitherError> {
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(DitherError::BufferLength {
            stage: Stage::Flatten,
            expected,
            actual: rgba.len(),
        });
    }

    let pixels = rgba
        .chunks_exact(4)
        .map(|px| ink_intensity(px[0], px[1], px[2], px[3]))
        .collect();

    GrayRaster::new(pixels, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_extremes() {
        assert_eq!(composite_over_white(0, 255), 0);
        assert_eq!(composite_over_white(0, 0), 255);
        assert_eq!(composite_over_white(200, 0), 255);
        assert_eq!(composite_over_white(37, 255), 37);
    }

    #[test]
    fn test_composite_half_alpha() {
        // 0 * 128/255 + 255 * 127/255 = 127
        assert_eq!(composite_over_white(0, 128), 127);
    }

    #[test]
    fn test_luminance_weights_linear_light() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        // Y = 0.2126 -> sRGB 0.4985
        assert_eq!(luminance(255, 0, 0), 127);
        // Y = 0.7152 -> sRGB 0.8630
        assert_eq!(luminance(0, 255, 0), 220);
        // Y = 0.0722 -> sRGB 0.2979
        assert_eq!(luminance(0, 0, 255), 76);
    }

    #[test]
    fn test_saturated_red_is_mid_ink() {
        assert_eq!(ink_intensity(255, 0, 0, 255), 128);
    }

    #[test]
    fn test_gray_input_is_preserved_by_luminance() {
        for v in 0..=255u8 {
            assert_eq!(luminance(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_ink_intensity_inverts() {
        assert_eq!(ink_intensity(255, 255, 255, 255), 0);
        assert_eq!(ink_intensity(0, 0, 0, 255), 255);
        assert_eq!(ink_intensity(100, 100, 100, 255), 155);
    }

    #[test]
    fn test_transparent_pixels_become_paper() {
        assert_eq!(ink_intensity(0, 0, 0, 0), 0);
        assert_eq!(ink_intensity(12, 200, 77, 0), 0);
    }

    #[test]
    fn test_flatten_rgba_dimensions() {
        let rgba = vec![255u8; 3 * 2 * 4];
        let gray = flatten_rgba(&rgba, 3, 2).unwrap();
        assert_eq!(gray.width(), 3);
        assert_eq!(gray.height(), 2);
        assert!(gray.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_flatten_rgba_rejects_short_buffer() {
        let err = flatten_rgba(&[0u8; 7], 2, 1).unwrap_err();
        assert_eq!(
            err,
            DitherError::BufferLength {
                stage: Stage::Flatten,
                expected: 8,
                actual: 7
            }
        );
    }
}
