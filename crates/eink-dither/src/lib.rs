#![allow(clippy::module_inception)]

//! eink-dither: Monochrome bitmaps for e-ink firmware
//!
//! This library turns an 8-bit RGBA raster into the compressed 1-bit bitmap
//! format that e-ink firmware decodes at boot: flatten to ink intensity,
//! Floyd-Steinberg error diffusion, MSB-first bit packing and a PackBits
//! variant of run-length encoding.
//!
//! # Quick Start
//!
//! The [`MonoEncoder`] builder is the primary entry point:
//!
//! ```
//! use eink_dither::{preprocess, MonoEncoder};
//!
//! // 16x16 opaque white RGBA
//! let rgba = vec![255u8; 16 * 16 * 4];
//! let gray = preprocess::flatten_rgba(&rgba, 16, 16).unwrap();
//!
//! let encoded = MonoEncoder::new().encode(gray).unwrap();
//!
//! assert_eq!(encoded.raw_len(), 32);
//! assert_eq!(encoded.compressed(), &[0xE1, 0x00]);
//! ```
//!
//! # Polarity
//!
//! Every raster in this crate stores *ink* intensity, not brightness:
//! `0` leaves the panel at its white rest state, `255` applies full ink.
//! [`preprocess::flatten_rgba`] performs the inversion once, so the
//! ditherer and packer never need to know about it.
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA bytes              (resized by the caller)
//!     |
//!     v
//! [flatten]               alpha over white, Rec. 709 luma, 255 - luma
//!     |
//!     v
//! GrayRaster              0..=255 ink intensity
//!     |
//!     v
//! [Floyd-Steinberg]       threshold 128, 8-bit clamped error diffusion
//!     |
//!     v
//! BinaryRaster            every pixel exactly 0 or 255
//!     |
//!     v
//! [pack]                  ceil(width / 8) bytes per row, MSB = leftmost
//!     |
//!     v
//! PackedBitmap
//!     |
//!     v
//! [PackBits encode]       control byte + payload pairs
//!     |
//!     v
//! EncodedBitmap           compressed bytes + raw length
//! ```
//!
//! # Bit Exactness
//!
//! The output is consumed by an existing firmware decoder and compared
//! against golden assets, so two details are fixed and must not be
//! "improved":
//!
//! - A pixel of exactly 128 quantizes to 255 (ink), not 0.
//! - A literal PackBits run stops in front of any adjacent equal pair,
//!   even when continuing the literal would produce a shorter stream.

pub mod api;
pub mod dither;
pub mod output;
pub mod packbits;
pub mod preprocess;
pub mod raster;


pub use api::{DitherError, MonoEncoder, Stage};
pub use dither::{Dither, FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use output::{EncodedBitmap, PackedBitmap};
pub use packbits::PackBitsError;
pub use raster::{BinaryRaster, GrayRaster};
