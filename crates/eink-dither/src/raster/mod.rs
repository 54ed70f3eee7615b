//! Single-channel rasters passed between pipeline stages.
//!
//! Both raster types store one `u8` per pixel in row-major order together
//! with their dimensions. Stages take rasters by value, so a raster is only
//! ever owned (and mutated) by the stage currently working on it.

mod binary;
mod gray;

pub use binary::{BinaryRaster, INK, PAPER};
pub use gray::GrayRaster;
