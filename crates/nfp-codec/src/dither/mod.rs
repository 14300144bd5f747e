//! Quantization of RGB rasters to palette indices.
//!
//! Two families are provided:
//!
//! - [`NearestColor`]: every pixel maps to its nearest palette entry on its
//!   own. No pixel depends on another.
//! - Error diffusion ([`FloydSteinberg`] and friends): the residual of each
//!   pixel is pushed onto neighbors the scan has not reached yet. Each
//!   output index depends on every earlier pixel, so the pass is one
//!   sequential sweep in raster order.
//!
//! All strategies implement [`Dither`] and return one `u8` palette index per
//! pixel in row-major order.
//!
//! # Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use nfp_codec::dither::{Dither, DitherOptions, FloydSteinberg};
//! use nfp_codec::palette::COMPUTERCRAFT;
//!
//! let image = RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]));
//! let indices = FloydSteinberg.dither(&image, &COMPUTERCRAFT, &DitherOptions::new());
//! assert_eq!(indices.len(), 16);
//! ```

mod atkinson;
mod floyd_steinberg;
mod jjn;
mod kernel;
mod nearest;
mod options;
mod sierra;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use jjn::JarvisJudiceNinke;
pub use kernel::*;
pub use nearest::NearestColor;
pub use options::DitherOptions;
pub use sierra::{Sierra, SierraLite, SierraTwoRow};

use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::palette::Palette;

/// Error diffusion algorithm selection.
///
/// Only consulted when dithering is enabled; otherwise the encoder uses
/// [`NearestColor`].
///
/// # Example
///
/// ```
/// use nfp_codec::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "sierra-lite".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::SierraLite);
/// assert_eq!(algorithm.to_string(), "sierra-lite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,

    /// Atkinson (75% propagation, 6 neighbors).
    ///
    /// Keeps more contrast; large flat areas stay flatter.
    Atkinson,

    /// Jarvis-Judice-Ninke (100% propagation, 12 neighbors).
    JarvisJudiceNinke,

    /// Sierra (100% propagation, 10 neighbors).
    Sierra,

    /// Sierra two-row (100% propagation, 7 neighbors).
    SierraTwoRow,

    /// Sierra Lite (100% propagation, 3 neighbors).
    SierraLite,
}

impl DitherAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [DitherAlgorithm; 6] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::JarvisJudiceNinke,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::SierraTwoRow,
        DitherAlgorithm::SierraLite,
    ];

    /// Kebab-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            DitherAlgorithm::Sierra => "sierra",
            DitherAlgorithm::SierraTwoRow => "sierra-two-row",
            DitherAlgorithm::SierraLite => "sierra-lite",
        }
    }

    /// The diffusion kernel for this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitherAlgorithm::Atkinson => &ATKINSON,
            DitherAlgorithm::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
            DitherAlgorithm::Sierra => &SIERRA,
            DitherAlgorithm::SierraTwoRow => &SIERRA_TWO_ROW,
            DitherAlgorithm::SierraLite => &SIERRA_LITE,
        }
    }

    /// The [`Dither`] implementation for this algorithm.
    pub fn ditherer(self) -> &'static dyn Dither {
        match self {
            DitherAlgorithm::FloydSteinberg => &FloydSteinberg,
            DitherAlgorithm::Atkinson => &Atkinson,
            DitherAlgorithm::JarvisJudiceNinke => &JarvisJudiceNinke,
            DitherAlgorithm::Sierra => &Sierra,
            DitherAlgorithm::SierraTwoRow => &SierraTwoRow,
            DitherAlgorithm::SierraLite => &SierraLite,
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dither algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = DitherAlgorithm::ALL.iter().map(|a| a.name()).collect();
        write!(
            f,
            "unknown dither algorithm {:?} (expected one of: {})",
            self.name,
            known.join(", ")
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    /// Parse a kebab-case algorithm name. Case and `_`/`-` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DitherAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}

/// A quantization strategy producing palette indices from an RGB raster.
pub trait Dither {
    /// Quantize `image` against `palette`.
    ///
    /// Returns one index per pixel in row-major order, each in
    /// `0..palette.len()`.
    fn dither(&self, image: &RgbImage, palette: &Palette, options: &DitherOptions) -> Vec<u8>;
}

/// Error buffer for efficient error diffusion.
///
/// Keeps only the rows the kernel can reach (`max_dy + 1`), rotating them
/// as the scan moves down. `rows[0]` is the row being processed.
#[derive(Debug)]
pub struct ErrorBuffer {
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer of `row_depth` rows.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a pixel `row_offset` rows below the current one.
    ///
    /// Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Move to the next row: drop the current one, append a zeroed row.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Clamp a channel carrying error to `[-headroom, 255 + headroom]`.
#[inline]
pub(crate) fn clamp_channel(value: f32, headroom: f32) -> f32 {
    value.clamp(-headroom, 255.0 + headroom)
}

/// Error diffusion loop shared by every kernel.
///
/// Visits pixels left to right, top to bottom. For each pixel the
/// accumulated error is added, the nearest palette entry chosen, and
/// `pixel - palette[idx]` spread over the kernel's forward neighbors.
pub(crate) fn dither_with_kernel(
    image: &RgbImage,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Vec<u8> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for (y, row) in image.rows().enumerate() {
        for (x, source) in row.enumerate() {
            let accumulated = error_buf.get_accumulated(x);
            let pixel = [
                clamp_channel(source.0[0] as f32 + accumulated[0], options.error_clamp),
                clamp_channel(source.0[1] as f32 + accumulated[1], options.error_clamp),
                clamp_channel(source.0[2] as f32 + accumulated[2], options.error_clamp),
            ];

            let (nearest_idx, _dist) = palette.find_nearest(pixel);
            output[y * width + x] = nearest_idx as u8;

            let chosen = palette.color(nearest_idx).0;
            let error = [
                pixel[0] - chosen[0] as f32,
                pixel[1] - chosen[1] as f32,
                pixel[2] - chosen[2] as f32,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 || nx as usize >= width || y + dy as usize >= height {
                    continue;
                }
                let share = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * share, error[1] * share, error[2] * share],
                );
            }
        }
        error_buf.advance_row();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in DitherAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<DitherAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_algorithm_parse_is_lenient_on_case_and_separator() {
        assert_eq!(
            "Floyd_Steinberg".parse::<DitherAlgorithm>(),
            Ok(DitherAlgorithm::FloydSteinberg)
        );
        assert_eq!(
            " ATKINSON ".parse::<DitherAlgorithm>(),
            Ok(DitherAlgorithm::Atkinson)
        );
    }

    #[test]
    fn test_algorithm_parse_unknown() {
        let err = "bayer".parse::<DitherAlgorithm>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"bayer\""), "{message}");
        assert!(message.contains("floyd-steinberg"), "{message}");
    }

    #[test]
    fn test_default_algorithm_is_floyd_steinberg() {
        assert_eq!(DitherAlgorithm::default(), DitherAlgorithm::FloydSteinberg);
        assert_eq!(DitherAlgorithm::default().kernel().divisor, 16);
    }

    #[test]
    fn test_error_buffer_rotation() {
        let mut buf = ErrorBuffer::new(3, 2);
        buf.add_error(1, 0, [1.0, 2.0, 3.0]);
        buf.add_error(2, 1, [4.0, 4.0, 4.0]);
        buf.add_error(5, 0, [9.0, 9.0, 9.0]); // ignored
        buf.add_error(0, 7, [9.0, 9.0, 9.0]); // ignored
        assert_eq!(buf.get_accumulated(1), [1.0, 2.0, 3.0]);

        buf.advance_row();
        assert_eq!(buf.get_accumulated(1), [0.0; 3]);
        assert_eq!(buf.get_accumulated(2), [4.0; 3]);

        buf.advance_row();
        assert_eq!(buf.get_accumulated(2), [0.0; 3]);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-10.0, 0.0), 0.0);
        assert_eq!(clamp_channel(300.0, 0.0), 255.0);
        assert_eq!(clamp_channel(-10.0, 4.0), -4.0);
        assert_eq!(clamp_channel(100.0, 4.0), 100.0);
    }

    #[test]
    fn test_every_ditherer_emits_valid_indices() {
        let palette = crate::palette::COMPUTERCRAFT.clone();
        let image = RgbImage::from_fn(9, 5, |x, y| Rgb([(x * 28) as u8, (y * 60) as u8, 90]));
        for algorithm in DitherAlgorithm::ALL {
            let indices = algorithm
                .ditherer()
                .dither(&image, &palette, &DitherOptions::new());
            assert_eq!(indices.len(), 45, "{algorithm}");
            assert!(indices.iter().all(|&i| (i as usize) < palette.len()));
        }
    }
}
