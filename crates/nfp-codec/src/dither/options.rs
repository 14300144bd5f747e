//! Dithering options.

/// Configuration for error diffusion.
///
/// Scan order is not configurable: pixels are always visited left to right,
/// top to bottom, so the output is reproducible.
///
/// # Example
///
/// ```
/// use nfp_codec::DitherOptions;
///
/// let options = DitherOptions::new().error_clamp(32.0);
/// assert_eq!(options.error_clamp, 32.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// How far (in 0..=255 channel units) a pixel plus its accumulated error
    /// may leave the valid channel range before it is clamped.
    ///
    /// `0.0` clamps to `0..=255`, which keeps a run of saturated pixels from
    /// piling up error that would later bleed into unrelated colors.
    ///
    /// Default: `0.0`
    pub error_clamp: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self { error_clamp: 0.0 }
    }
}

impl DitherOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error clamp headroom. Negative values are treated as `0.0`.
    #[inline]
    pub fn error_clamp(mut self, headroom: f32) -> Self {
        self.error_clamp = headroom.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(DitherOptions::new().error_clamp, 0.0);
    }

    #[test]
    fn test_negative_clamp_is_zero() {
        assert_eq!(DitherOptions::new().error_clamp(-5.0).error_clamp, 0.0);
    }
}
