//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry specifies an offset (dx, dy) from the current pixel and the
/// weight that neighbor receives. Only neighbors not yet visited in a
/// row-major forward scan may appear: `dy > 0`, or `dy == 0` with `dx > 0`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
