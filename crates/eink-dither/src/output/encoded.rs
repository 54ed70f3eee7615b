//! Compressed bitmap handed to the asset emitter.

use super::PackedBitmap;
use crate::api::DitherError;
use crate::packbits;

/// A PackBits-compressed 1-bit bitmap with its dimensions.
///
/// `raw_len` is the length of the packed bitmap before compression
/// (`ceil(width / 8) * height`); firmware allocates its decode buffer from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBitmap {
    compressed: Vec<u8>,
    width: usize,
    height: usize,
    raw_len: usize,
}

impl EncodedBitmap {
    /// Compress a packed bitmap.
    pub fn encode(packed: &PackedBitmap) -> Self {
        Self {
            compressed: packbits::encode(packed.bytes()),
            width: packed.width(),
            height: packed.height(),
            raw_len: packed.bytes().len(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The compressed stream, in emission order.
    #[inline]
    pub fn compressed(&self) -> &[u8] {
        &self.compressed
    }

    #[inline]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn into_compressed(self) -> Vec<u8> {
        self.compressed
    }

    /// Decode back into a packed bitmap using the reference decoder.
    pub fn decode(&self) -> Result<PackedBitmap, DitherError> {
        let bytes = packbits::decode(&self.compressed)?;
        PackedBitmap::from_bytes(bytes, self.width, self.height)
    }
}
