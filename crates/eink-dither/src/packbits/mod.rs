//! PackBits-style run-length coding of packed bitmaps.
//!
//! # Format
//!
//! The stream is a sequence of (control byte, payload) pairs:
//!
//! | Control `c` | Payload | Meaning |
//! |-------------|---------|---------|
//! | `0..=127`   | `c + 1` bytes | copy the payload literally |
//! | `128`       | -       | reserved, never emitted |
//! | `129..=255` | 1 byte  | repeat the byte `257 - c` times |
//!
//! Runs are therefore 2 to 128 bytes long and literals 1 to 128 bytes, but
//! the encoder never emits a run longer than 127 (control 130 is the
//! smallest it writes).
//!
//! # Worst Case
//!
//! There is no raw fallback. Input without any adjacent equal pair encodes
//! as literal blocks of up to 128 bytes, so the output is at most
//! `n + ceil(n / 128)` bytes.

mod decode;
mod encode;

pub use decode::{decode, PackBitsError};
pub use encode::{encode, max_encoded_len, MAX_LITERAL, MAX_RUN};
