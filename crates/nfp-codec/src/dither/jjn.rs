//! Jarvis-Judice-Ninke error diffusion.

use image::RgbImage;

use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, JARVIS_JUDICE_NINKE};

/// Jarvis-Judice-Ninke error diffusion dithering.
///
/// Spreads the whole residual over 12 neighbors across three rows. The wide
/// kernel gives smoother gradients than Floyd-Steinberg, and is slower.
pub struct JarvisJudiceNinke;

impl Dither for JarvisJudiceNinke {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &JARVIS_JUDICE_NINKE, options)
    }
}
