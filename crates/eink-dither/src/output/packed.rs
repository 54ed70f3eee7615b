//! MSB-first 1-bit packing.

use crate::api::{DitherError, Stage};
use crate::raster::BinaryRaster;

/// Number of bytes holding one row of `width` pixels.
#[inline]
pub fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Pack a row of ink flags into bytes.
///
/// Bit 7 (MSB) of byte 0 is the leftmost pixel; a set bit means ink.
/// If the row length is not a multiple of 8, the last byte is padded with
/// zero bits on the right.
///
/// # Example
///
/// ```
/// use eink_dither::output::pack_row;
///
/// let row = [true, true, true, true, true, true, true, true, false, false];
/// assert_eq!(pack_row(&row), vec![0xFF, 0x00]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bytes_per_row(pixels.len())];

    for (i, &ink) in pixels.iter().enumerate() {
        if ink {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }

    bytes
}

/// A 1-bit bitmap, `bytes_per_row * height` bytes long.
///
/// Bit `(y, x)` lives in byte `y * bytes_per_row + x / 8` at bit
/// `7 - x % 8`, and is set iff the source pixel receives ink. Padding bits
/// are always zero; a decoder must keep the original `width` to drop them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

impl PackedBitmap {
    /// Pack a dithered raster, consuming it.
    pub fn pack(raster: BinaryRaster) -> Self {
        let width = raster.width();
        let height = raster.height();
        let mut bytes = Vec::with_capacity(bytes_per_row(width) * height);

        for row in raster.pixels().chunks_exact(width.max(1)) {
            let ink: Vec<bool> = row.iter().map(|&p| p > 127).collect();
            bytes.extend(pack_row(&ink));
        }

        Self {
            bytes,
            width,
            height,
        }
    }

    /// Wrap already-packed bytes, e.g. from a decoder.
    pub fn from_bytes(bytes: Vec<u8>, width: usize, height: usize) -> Result<Self, DitherError> {
        let expected = bytes_per_row(width) * height;
        if bytes.len() != expected {
            return Err(DitherError::BufferLength {
                stage: Stage::Pack,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
        })
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
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
