//! Image preprocessing applied before quantization.
//!
//! The only step is an optional resize to a fixed target size. The nfp
//! grid is usually far smaller than the source photo, so resizing first is
//! the normal path.

mod resize;

pub use resize::resize_bilinear;

/// Default target width: a pocket computer's full screen in paint cells.
pub const DEFAULT_WIDTH: u32 = 164;

/// Default target height: a pocket computer's full screen in paint cells.
pub const DEFAULT_HEIGHT: u32 = 81;

/// Target dimensions for the resize step.
///
/// # Example
///
/// ```
/// use nfp_codec::TargetSize;
///
/// let size = TargetSize::default();
/// assert_eq!((size.width, size.height), (164, 81));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    /// Output width in cells
    pub width: u32,
    /// Output height in cells
    pub height: u32,
}

impl TargetSize {
    /// Create a target size.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl From<(u32, u32)> for TargetSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
