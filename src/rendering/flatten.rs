use eink_dither::{preprocess, DitherError, GrayRaster};
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use std::borrow::Cow;

/// Composite an image with alpha onto opaque white.
///
/// Must run before resampling: the kernel mixes neighboring pixels, and a
/// fully transparent pixel's color would otherwise leak into the result.
/// Images without alpha are borrowed unchanged.
pub fn composite_on_white(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    if !image.color().has_alpha() {
        return Cow::Borrowed(image);
    }

    let rgba = image.to_rgba8();
    let opaque = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        Rgb([
            preprocess::composite_over_white(r, a),
            preprocess::composite_over_white(g, a),
            preprocess::composite_over_white(b, a),
        ])
    });
    Cow::Owned(DynamicImage::ImageRgb8(opaque))
}

/// Turn a resampled image into an ink intensity raster.
///
/// Any pixel format is first widened to RGBA8, then composited onto white
/// (a no-op for images already passed through [`composite_on_white`]),
/// reduced to Rec. 709 luma and inverted.
pub fn flatten(image: DynamicImage) -> Result<GrayRaster, DitherError> {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    preprocess::flatten_rgba(rgba.as_raw(), width as usize, height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgba, RgbaImage};

    #[test]
    fn test_flatten_white_is_no_ink() {
        let image =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([255, 255, 255, 255])));
        let gray = flatten(image).unwrap();
        assert_eq!((gray.width(), gray.height()), (4, 3));
        assert!(gray.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_flatten_transparent_is_no_ink() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0])));
        let gray = flatten(image).unwrap();
        assert!(gray.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_flatten_luma_input() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 1, Luma([55])));
        let gray = flatten(image).unwrap();
        assert_eq!(gray.pixels(), &[200, 200]);
    }

    #[test]
    fn test_flatten_luma_alpha_input() {
        // Black at 50% alpha over white -> luma 127 -> ink 128
        let image =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(1, 1, LumaA([0, 128])));
        let gray = flatten(image).unwrap();
        assert_eq!(gray.pixels(), &[128]);
    }

    #[test]
    fn test_composite_on_white_drops_alpha() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        let source = DynamicImage::ImageRgba8(img);

        let opaque = composite_on_white(&source);
        assert!(!opaque.color().has_alpha());
        assert_eq!(opaque.to_rgb8().into_raw(), vec![255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_composite_on_white_borrows_opaque_input() {
        let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([9])));
        assert!(matches!(composite_on_white(&source), Cow::Borrowed(_)));
    }
}
