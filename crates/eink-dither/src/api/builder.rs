//! MonoEncoder builder -- the primary ergonomic entry point for the crate.
//!
//! [`MonoEncoder`] runs dither, pack and PackBits encode on an ink
//! intensity raster, optionally checking the compressed stream against the
//! reference decoder before handing it back.

use super::error::{DitherError, Stage};
use crate::dither::{Dither, FloydSteinberg};
use crate::output::{bytes_per_row, EncodedBitmap, PackedBitmap};
use crate::raster::GrayRaster;

/// High-level encoder from [`GrayRaster`] to [`EncodedBitmap`].
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`encode()`](Self::encode) takes `&self`, so one encoder can be shared
///   by several threads, each encoding its own raster
/// - Round-trip verification is on by default
///
/// # Example
///
/// ```
/// use eink_dither::{GrayRaster, MonoEncoder};
///
/// let encoder = MonoEncoder::new().verify(true);
/// let encoded = encoder.encode(GrayRaster::filled(10, 2, 255)).unwrap();
///
/// assert_eq!(encoded.raw_len(), 4);
/// assert_eq!(encoded.decode().unwrap().bytes(), &[0xFF, 0xC0, 0xFF, 0xC0]);
/// ```
#[derive(Debug, Clone)]
pub struct MonoEncoder {
    verify: bool,
}

impl Default for MonoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MonoEncoder {
    /// Create an encoder with Floyd-Steinberg dithering and verification on.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Decode every compressed stream and compare it with the packed bitmap.
    #[inline]
    pub fn verify(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    /// Dither, pack and compress `image`.
    ///
    /// The raster is consumed; intermediate buffers are dropped as soon as
    /// the next stage has produced its output.
    pub fn encode(&self, image: GrayRaster) -> Result<EncodedBitmap, DitherError> {
        let binary = FloydSteinberg.dither(image);

        let packed = PackedBitmap::pack(binary);
        let expected = bytes_per_row(packed.width()) * packed.height();
        if packed.bytes().len() != expected {
            return Err(DitherError::BufferLength {
                stage: Stage::Pack,
                expected,
                actual: packed.bytes().len(),
            });
        }

        let encoded = EncodedBitmap::encode(&packed);
        if self.verify {
            verify_round_trip(&encoded, &packed)?;
        }

        Ok(encoded)
    }
}

/// Check that `encoded` decodes back to exactly `packed`.
pub fn verify_round_trip(encoded: &EncodedBitmap, packed: &PackedBitmap) -> Result<(), DitherError> {
    let decoded = crate::packbits::decode(encoded.compressed())?;
    let original = packed.bytes();

    if let Some(offset) = decoded
        .iter()
        .zip(original)
        .position(|(a, b)| a != b)
    {
        return Err(DitherError::RoundTripMismatch { offset });
    }
    if decoded.len() != original.len() {
        return Err(DitherError::RoundTripMismatch {
            offset: decoded.len().min(original.len()),
        });
    }

    Ok(())
}
