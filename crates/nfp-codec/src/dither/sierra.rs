//! Sierra family error diffusion: full, two-row and lite.

use image::RgbImage;

use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, SIERRA, SIERRA_LITE, SIERRA_TWO_ROW};

/// Sierra (three-row) error diffusion dithering.
pub struct Sierra;

impl Dither for Sierra {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &SIERRA, options)
    }
}

/// Sierra two-row error diffusion dithering.
pub struct SierraTwoRow;

impl Dither for SierraTwoRow {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &SIERRA_TWO_ROW, options)
    }
}

/// Sierra Lite error diffusion dithering.
///
/// Cheapest of the family, three neighbors.
pub struct SierraLite;

impl Dither for SierraLite {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &SIERRA_LITE, options)
    }
}
