//! Atkinson error diffusion.

use image::RgbImage;

use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// Spreads 6/8 of the residual over 6 neighbors and drops the rest:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// With the 16-color terminal palette this keeps flat regions cleaner than
/// Floyd-Steinberg at the cost of crushing some mid-tones.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &ATKINSON, options)
    }
}
