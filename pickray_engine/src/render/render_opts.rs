use nonzero::nonzero;
use serde::Serialize;
use std::num::NonZeroUsize;
use valuable::Valuable;

/// Options for the preview render
#[derive(Copy, Clone, Debug, PartialEq, Eq, Valuable, Serialize)]
pub struct PreviewOpts {
    /// The target dimensions of the render
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
}

impl PreviewOpts {
    /// Creates options for a render of at least one pixel in each direction, clamping zero-sized dimensions
    pub fn clamped(width: usize, height: usize) -> Self {
        let clamp = |d: usize| NonZeroUsize::new(d).unwrap_or(nonzero!(1_usize));
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            width: nonzero!(480_usize),
            height: nonzero!(270_usize),
        }
    }
}
