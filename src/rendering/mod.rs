//! Decode, resample and flatten the source image for one profile.

pub mod flatten;
pub mod resample;

pub use flatten::{composite_on_white, flatten};
pub use resample::{decode_source, resample, target_dimensions};
