//! NfpEncoder builder, the image → nfp entry point.
//!
//! [`NfpEncoder`] wraps resize, quantization and document assembly behind a
//! fluent builder.

use image::{DynamicImage, RgbImage};

use super::CodecError;
use crate::dither::{Dither, DitherAlgorithm, DitherOptions, NearestColor};
use crate::output::NfpDocument;
use crate::palette::Palette;
use crate::preprocess::{resize_bilinear, TargetSize};

/// Image → nfp encoder.
///
/// # Design
///
/// - Constructor requires a [`Palette`]
/// - Configuration methods consume and return `self`
/// - [`encode()`](Self::encode) takes `&self`, so one encoder converts any
///   number of images, from any number of threads
/// - No resize by default; call [`resize()`](Self::resize) to opt in
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use nfp_codec::{NfpEncoder, Palette};
///
/// let encoder = NfpEncoder::new(Palette::default()).resize(4, 2).dither(true);
///
/// let image = RgbImage::from_pixel(16, 8, Rgb([17, 17, 17]));
/// let doc = encoder.encode(&image).unwrap();
///
/// assert_eq!(doc.to_string(), "ffff\nffff");
/// ```
#[derive(Debug, Clone)]
pub struct NfpEncoder {
    palette: Palette,
    resize: Option<TargetSize>,
    dither: bool,
    algorithm: DitherAlgorithm,
    dither_opts: DitherOptions,
}

impl NfpEncoder {
    /// Create an encoder for `palette`: no resize, no dithering,
    /// Floyd-Steinberg when dithering is turned on.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            resize: None,
            dither: false,
            algorithm: DitherAlgorithm::default(),
            dither_opts: DitherOptions::new(),
        }
    }

    /// Resize to exactly `width` x `height` before quantizing.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.resize = Some(TargetSize::new(width, height));
        self
    }

    /// Set or clear the resize target.
    #[inline]
    pub fn target_size(mut self, target: Option<TargetSize>) -> Self {
        self.resize = target;
        self
    }

    /// Enable or disable error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Select the error diffusion kernel. Has no effect unless dithering
    /// is enabled.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the error clamp headroom (see [`DitherOptions::error_clamp`]).
    #[inline]
    pub fn error_clamp(mut self, headroom: f32) -> Self {
        self.dither_opts = self.dither_opts.error_clamp(headroom);
        self
    }

    /// The palette this encoder quantizes against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The configured resize target, if any.
    #[inline]
    pub fn resize_target(&self) -> Option<TargetSize> {
        self.resize
    }

    /// Whether dithering is enabled.
    #[inline]
    pub fn is_dithering(&self) -> bool {
        self.dither
    }

    /// The configured dither algorithm.
    #[inline]
    pub fn dither_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// Encode an RGB image.
    ///
    /// # Errors
    ///
    /// [`CodecError::EmptyImage`] if the image or the resize target has a
    /// zero dimension. The reported size is the one that was empty.
    pub fn encode(&self, image: &RgbImage) -> Result<NfpDocument, CodecError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CodecError::EmptyImage { width, height });
        }

        let resized;
        let source = match self.resize {
            Some(target) if target.is_empty() => {
                return Err(CodecError::EmptyImage {
                    width: target.width,
                    height: target.height,
                });
            }
            Some(target) => {
                resized = resize_bilinear(image, target);
                &resized
            }
            None => image,
        };

        let ditherer: &dyn Dither = if self.dither {
            self.algorithm.ditherer()
        } else {
            &NearestColor
        };
        let indices = ditherer.dither(source, &self.palette, &self.dither_opts);

        Ok(NfpDocument::from_indices(&indices, source.width() as usize))
    }

    /// Encode any decoded image. Alpha is discarded.
    pub fn encode_dynamic(&self, image: &DynamicImage) -> Result<NfpDocument, CodecError> {
        match image {
            DynamicImage::ImageRgb8(rgb) => self.encode(rgb),
            other => self.encode(&other.to_rgb8()),
        }
    }
}

impl Default for NfpEncoder {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
