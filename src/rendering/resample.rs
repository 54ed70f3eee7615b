use crate::error::ConvertError;
use crate::models::HardwareProfile;
use crate::rendering::composite_on_white;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into a raster.
pub fn decode_source(bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
    let image =
        image::load_from_memory(bytes).map_err(|e| ConvertError::InvalidImage(e.to_string()))?;
    check_dimensions(image.width(), image.height())?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded source image"
    );
    Ok(image)
}

fn check_dimensions(width: u32, height: u32) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidImage(format!(
            "zero dimension {width}x{height}"
        )));
    }
    Ok(())
}

/// Output size for a `src_width` x `src_height` source on `profile`.
///
/// `ratio = min(max_width / src_width, max_height / src_height) * scale`;
/// each side is `round(side * ratio)`, at least 1.
pub fn target_dimensions(
    src_width: u32,
    src_height: u32,
    profile: &HardwareProfile,
    scale: f64,
) -> Result<(u32, u32), ConvertError> {
    check_dimensions(src_width, src_height)?;

    let fit_w = f64::from(profile.max_width) / f64::from(src_width);
    let fit_h = f64::from(profile.max_height) / f64::from(src_height);
    let ratio = fit_w.min(fit_h) * scale;

    let width = (f64::from(src_width) * ratio).round() as u32;
    let height = (f64::from(src_height) * ratio).round() as u32;

    Ok((width.max(1), height.max(1)))
}

/// Resample `source` to fit `profile` with the Lanczos3 kernel.
///
/// Alpha is composited onto white first, so the result is always opaque.
/// Returns an owned copy; the shared source is never modified.
pub fn resample(
    source: &DynamicImage,
    profile: &HardwareProfile,
    scale: f64,
) -> Result<DynamicImage, ConvertError> {
    let (width, height) = target_dimensions(source.width(), source.height(), profile, scale)?;
    let opaque = composite_on_white(source);

    if (width, height) == source.dimensions() {
        return Ok(opaque.into_owned());
    }

    Ok(opaque.resize_exact(width, height, FilterType::Lanczos3))
}
