//! Inklogo - monochrome logo assets for e-ink firmware
//!
//! Converts an arbitrary image into PackBits-compressed 1-bit bitmaps, one
//! per hardware profile, and emits them as C++ source/header pairs.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
