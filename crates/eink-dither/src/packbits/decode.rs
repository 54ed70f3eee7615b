//! Reference PackBits decoder.
//!
//! Implements the firmware's control-byte contract on the host so encoded
//! assets can be checked before they are emitted.

use std::fmt;

/// Error type for malformed PackBits streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackBitsError {
    /// The stream ends inside a block
    Truncated {
        /// Offset of the control byte whose payload is incomplete
        offset: usize,
    },
    /// Control byte 128, which the format leaves unused
    ReservedControl {
        /// Offset of the control byte
        offset: usize,
    },
}

impl fmt::Display for PackBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackBitsError::Truncated { offset } => {
                write!(f, "block at offset {} is truncated", offset)
            }
            PackBitsError::ReservedControl { offset } => {
                write!(f, "reserved control byte 128 at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for PackBitsError {}

/// Expand a PackBits stream.
///
/// # Example
///
/// ```
/// use eink_dither::packbits::decode;
///
/// assert_eq!(decode(&[0xE1, 0x00]).unwrap(), vec![0u8; 32]);
/// assert_eq!(decode(&[0x01, 7, 8]).unwrap(), vec![7, 8]);
/// ```
pub fn decode(data: &[u8]) -> Result<Vec<u8>, PackBitsError> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let offset = i;
        let control = data[i];
        i += 1;

        match control {
            0..=127 => {
                let len = usize::from(control) + 1;
                let literal = data
                    .get(i..i + len)
                    .ok_or(PackBitsError::Truncated { offset })?;
                out.extend_from_slice(literal);
                i += len;
            }
            128 => return Err(PackBitsError::ReservedControl { offset }),
            _ => {
                let &byte = data.get(i).ok_or(PackBitsError::Truncated { offset })?;
                let count = 257 - usize::from(control);
                out.resize(out.len() + count, byte);
                i += 1;
            }
        }
    }

    Ok(out)
}
