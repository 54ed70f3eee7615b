//! Assertion helpers for tests.

use inklogo::models::Artifact;
use pretty_assertions::assert_eq;

/// Assert the artifact's stream decodes to a bitmap of the right size
pub fn assert_round_trips(artifact: &Artifact) -> Vec<u8> {
    let decoded = eink_dither::packbits::decode(&artifact.compressed).unwrap_or_else(|e| {
        panic!(
            "{}: compressed stream does not decode: {e}",
            artifact.profile.name
        )
    });
    let row_bytes = (artifact.width as usize).div_ceil(8);
    assert_eq!(
        decoded.len(),
        row_bytes * artifact.height as usize,
        "{}: decoded length does not match {}x{}",
        artifact.profile.name,
        artifact.width,
        artifact.height
    );
    assert_eq!(decoded.len(), artifact.raw_len);
    decoded
}

/// Assert the artifact fits inside its profile's bounds
pub fn assert_fits_profile(artifact: &Artifact) {
    let profile = &artifact.profile;
    assert!(
        artifact.width <= profile.max_width && artifact.height <= profile.max_height,
        "{}: {}x{} exceeds {}x{}",
        profile.name,
        artifact.width,
        artifact.height,
        profile.max_width,
        profile.max_height
    );
}

/// Number of inked pixels in a decoded bitmap (padding bits are always zero)
pub fn ink_pixels(decoded: &[u8]) -> u32 {
    decoded.iter().map(|b| b.count_ones()).sum()
}
