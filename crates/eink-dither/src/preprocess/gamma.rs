//! sRGB transfer function (IEC 61966-2-1).

/// Decode a gamma-encoded sRGB value (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light value (0.0..=1.0) with the sRGB gamma curve.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
