//! Plain nearest-color quantization.

use image::RgbImage;

use crate::palette::Palette;

use super::{Dither, DitherOptions};

/// Maps every pixel to its nearest palette entry independently.
///
/// This is the encoder's behavior when dithering is off. Because no pixel
/// depends on another, the result is exactly `palette.nearest_index(p)` for
/// each pixel `p`.
pub struct NearestColor;

impl Dither for NearestColor {
    fn dither(&self, image: &RgbImage, palette: &Palette, _options: &DitherOptions) -> Vec<u8> {
        image
            .pixels()
            .map(|&pixel| palette.nearest_index(pixel) as u8)
            .collect()
    }
}
