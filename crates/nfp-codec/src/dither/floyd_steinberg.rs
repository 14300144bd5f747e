//! Floyd-Steinberg error diffusion.

use image::RgbImage;

use crate::palette::Palette;

use super::{dither_with_kernel, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The default algorithm when dithering is enabled. Distributes the whole
/// residual to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Sixteen evenly spaced greys, index `i` = `i * 17`.
    fn grey_ramp() -> Palette {
        let colors: Vec<Rgb<u8>> = (0..16u8).map(|i| Rgb([i * 17, i * 17, i * 17])).collect();
        Palette::new(&colors).unwrap()
    }

    fn mean_level(indices: &[u8]) -> f32 {
        indices.iter().map(|&i| i as f32 * 17.0).sum::<f32>() / indices.len() as f32
    }

    #[test]
    fn test_floyd_steinberg_between_levels_mixes() {
        let palette = grey_ramp();
        // 128 sits between 119 (7) and 136 (8)
        let image = RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]));

        let result = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());

        assert_eq!(result.len(), 16);
        assert!(result.contains(&7) && result.contains(&8), "{result:?}");
        assert!(result.iter().all(|&i| i == 7 || i == 8), "{result:?}");
    }

    #[test]
    fn test_floyd_steinberg_preserves_average_brightness() {
        let palette = grey_ramp();
        let image = RgbImage::from_pixel(10, 10, Rgb([77, 77, 77]));

        let result = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());

        let mean = mean_level(&result);
        assert!((mean - 77.0).abs() < 3.0, "expected ~77, got {mean}");
    }

    #[test]
    fn test_floyd_steinberg_exact_colors_stay_put() {
        let palette = grey_ramp();
        let image = RgbImage::from_fn(6, 3, |x, _| {
            if x % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });

        let result = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());

        let expected: Vec<u8> = (0..18).map(|i| if i % 2 == 0 { 0 } else { 15 }).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_floyd_steinberg_residual_goes_right() {
        let palette = grey_ramp();
        // 8 quantizes to 0 leaving +8; 7/16 of it lifts the neighbour from 8
        // to 11.5, past the 8.5 midpoint.
        let image = RgbImage::from_raw(2, 1, vec![8, 8, 8, 8, 8, 8]).unwrap();
        let result = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());
        assert_eq!(result, vec![0, 1]);

        let image = RgbImage::from_raw(2, 1, vec![8, 8, 8, 4, 4, 4]).unwrap();
        let result = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());
        assert_eq!(result, vec![0, 0]);
    }
}
