//! Test images and profiles, generated in memory.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use inklogo::models::{ConvertConfig, HardwareProfile};
use std::io::Cursor;

/// Opaque white, the panel's rest state
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Opaque black, full ink
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, color))
}

/// Horizontal gray ramp from white on the left to black on the right
pub fn ramp(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        let v = 255 - (x * 255 / width.max(1)) as u8;
        Rgba([v, v, v, 255])
    });
    DynamicImage::ImageRgba8(img)
}

/// Black square centered on a white field
pub fn framed_square(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let inside = x >= width / 4 && x < width * 3 / 4 && y >= height / 4 && y < height * 3 / 4;
        if inside {
            BLACK
        } else {
            WHITE
        }
    });
    DynamicImage::ImageRgba8(img)
}

/// Fully transparent black, the usual background of a logo PNG
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Per-pixel checkerboard of opaque white and transparent black.
///
/// Composited onto white it is uniformly white.
pub fn alpha_checkerboard(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            WHITE
        } else {
            CLEAR
        }
    });
    DynamicImage::ImageRgba8(img)
}

/// Centered square of `color` on a transparent black field
pub fn square_on_clear(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let inside = x >= width / 4 && x < width * 3 / 4 && y >= height / 4 && y < height * 3 / 4;
        if inside {
            color
        } else {
            CLEAR
        }
    });
    DynamicImage::ImageRgba8(img)
}

/// Encode `image` as PNG bytes
pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("PNG encoding failed");
    buf.into_inner()
}

/// Profile whose bounds equal `width` x `height`
pub fn exact_profile(name: &str, width: u32, height: u32) -> HardwareProfile {
    HardwareProfile::new(
        name,
        width,
        height,
        format!("ARDUINO_{name}"),
        format!("logo_{}", name.to_lowercase()),
    )
}

/// Config that keeps the source size when it already fits the profiles
pub fn full_scale(profiles: Vec<HardwareProfile>) -> ConvertConfig {
    ConvertConfig {
        scale: 1.0,
        profiles,
        ..ConvertConfig::default()
    }
}
