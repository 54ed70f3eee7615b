//! Output types for the encoding pipeline.
//!
//! - [`PackedBitmap`]: 1 bit per pixel, MSB-first, rows padded to whole bytes
//! - [`EncodedBitmap`]: the PackBits stream plus the metadata a decoder
//!   needs to rebuild the packed bitmap

mod encoded;
mod packed;

pub use encoded::EncodedBitmap;
pub use packed::{bytes_per_row, pack_row, PackedBitmap};
