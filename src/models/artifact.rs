use eink_dither::EncodedBitmap;

use super::HardwareProfile;

/// Compressed logo for one hardware profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub profile: HardwareProfile,

    /// Bitmap width after resampling
    pub width: u32,

    /// Bitmap height after resampling
    pub height: u32,

    /// PackBits stream, in emission order
    pub compressed: Vec<u8>,

    /// Length of the packed 1-bit bitmap before compression
    pub raw_len: usize,
}

impl Artifact {
    pub fn new(profile: HardwareProfile, encoded: EncodedBitmap) -> Self {
        let width = encoded.width() as u32;
        let height = encoded.height() as u32;
        let raw_len = encoded.raw_len();
        Self {
            profile,
            width,
            height,
            compressed: encoded.into_compressed(),
            raw_len,
        }
    }

    pub fn compressed_len(&self) -> usize {
        self.compressed.len()
    }

    /// Size saving of the compressed stream over the raw bitmap, in percent
    pub fn reduction_percent(&self) -> f64 {
        if self.raw_len == 0 {
            return 0.0;
        }
        (1.0 - self.compressed.len() as f64 / self.raw_len as f64) * 100.0
    }
}
