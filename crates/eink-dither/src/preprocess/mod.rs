//! Image preprocessing ahead of dithering.
//!
//! Resizing happens in the caller (it needs a decoder and a resampling
//! kernel). A caller that resizes must composite onto white first, with
//! [`composite_over_white`] on every channel: resampling straight alpha
//! bleeds the color of transparent pixels into their neighbors. This module
//! takes the resized RGBA bytes and produces the
//! [`GrayRaster`](crate::GrayRaster) the ditherer consumes:
//!
//! 1. **Flatten** - composite alpha onto opaque white
//! 2. **Luminance** - Rec. 709 weighting in linear light, re-encoded as sRGB
//! 3. **Invert** - `255 - luma`, so high values mean "apply ink"

mod flatten;
mod gamma;

pub use flatten::{composite_over_white, flatten_rgba, ink_intensity, luminance};
pub use gamma::{linear_to_srgb, srgb_to_linear};
