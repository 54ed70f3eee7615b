//! Public API for the eink-dither crate.
//!
//! This module provides the high-level API: [`MonoEncoder`] builder,
//! [`DitherError`] unified error type and the [`Stage`] each error is
//! attributed to.

mod builder;
mod error;

pub use builder::{verify_round_trip, MonoEncoder};
pub use error::{DitherError, Stage};
