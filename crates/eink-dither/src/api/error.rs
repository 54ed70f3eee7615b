//! Unified error type for the eink-dither public API.
//!
//! Every error here is an internal fault: the stages are total functions over
//! well-formed rasters, so an error means a caller handed over a buffer of
//! the wrong shape or an encoder/decoder pair disagrees. [`DitherError::stage`]
//! names the stage so the caller can report where the pipeline broke.

use crate::packbits::PackBitsError;
use std::fmt;

/// Pipeline stage an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Alpha compositing, luminance and polarity inversion.
    Flatten,
    /// Error diffusion to two levels.
    Dither,
    /// Packing pixels into MSB-first byte rows.
    Pack,
    /// PackBits run-length encoding and its round-trip check.
    Rle,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Flatten => "flatten",
            Stage::Dither => "dither",
            Stage::Pack => "pack",
            Stage::Rle => "rle",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the eink-dither public API.
///
/// # Example
///
/// ```
/// use eink_dither::{DitherError, GrayRaster, Stage};
///
/// let err = GrayRaster::new(vec![0; 3], 2, 2).unwrap_err();
/// assert_eq!(err.stage(), Stage::Flatten);
/// assert!(matches!(err, DitherError::BufferLength { expected: 4, actual: 3, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// A buffer does not match the dimensions it was declared with
    BufferLength {
        /// Stage that received the buffer
        stage: Stage,
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// A two-level raster contains a value other than 0 or 255
    NonBinaryPixel {
        /// Row-major index of the first offending pixel
        index: usize,
        /// The offending value
        value: u8,
    },
    /// A compressed block violates the control-byte contract
    Decode(PackBitsError),
    /// Decoding the compressed block did not reproduce the packed bitmap
    RoundTripMismatch {
        /// First differing byte offset, or the shorter length on a length mismatch
        offset: usize,
    },
}

impl DitherError {
    /// The stage this error is attributed to.
    pub fn stage(&self) -> Stage {
        match self {
            DitherError::BufferLength { stage, .. } => *stage,
            DitherError::NonBinaryPixel { .. } => Stage::Dither,
            DitherError::Decode(_) | DitherError::RoundTripMismatch { .. } => Stage::Rle,
        }
    }
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::BufferLength {
                stage,
                expected,
                actual,
            } => write!(
                f,
                "{} buffer length mismatch: expected {} bytes, got {}",
                stage, expected, actual
            ),
            DitherError::NonBinaryPixel { index, value } => {
                write!(f, "pixel {} has value {}, expected 0 or 255", index, value)
            }
            DitherError::Decode(err) => write!(f, "packbits decode error: {}", err),
            DitherError::RoundTripMismatch { offset } => {
                write!(f, "packbits round trip differs at byte {}", offset)
            }
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PackBitsError> for DitherError {
    fn from(err: PackBitsError) -> Self {
        DitherError::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Flatten.to_string(), "flatten");
        assert_eq!(Stage::Dither.to_string(), "dither");
        assert_eq!(Stage::Pack.to_string(), "pack");
        assert_eq!(Stage::Rle.to_string(), "rle");
    }

    #[test]
    fn test_buffer_length_display() {
        let err = DitherError::BufferLength {
            stage: Stage::Pack,
            expected: 8,
            actual: 6,
        };
        assert_eq!(
            err.to_string(),
            "pack buffer length mismatch: expected 8 bytes, got 6"
        );
        assert_eq!(err.stage(), Stage::Pack);
    }

    #[test]
    fn test_decode_error_has_source() {
        use std::error::Error;

        let err = DitherError::from(PackBitsError::ReservedControl { offset: 3 });
        assert_eq!(err.stage(), Stage::Rle);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_round_trip_mismatch_display() {
        let err = DitherError::RoundTripMismatch { offset: 17 };
        assert_eq!(err.to_string(), "packbits round trip differs at byte 17");
    }
}
