//! One-call conversions against the ComputerCraft palette.

use image::RgbImage;

use super::{CodecError, NfpDecoder, NfpEncoder};
use crate::palette::COMPUTERCRAFT;

/// Convert an RGB image to nfp text.
///
/// `size` resizes the image first when given. `dither` enables
/// Floyd-Steinberg error diffusion.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use nfp_codec::image_to_nfp;
///
/// let image = RgbImage::from_fn(2, 1, |x, _| {
///     if x == 0 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
/// });
/// assert_eq!(image_to_nfp(&image, None, false).unwrap(), "0f");
/// ```
pub fn image_to_nfp(
    image: &RgbImage,
    size: Option<(u32, u32)>,
    dither: bool,
) -> Result<String, CodecError> {
    let encoder = NfpEncoder::new(COMPUTERCRAFT.clone())
        .target_size(size.map(Into::into))
        .dither(dither);
    encoder.encode(image).map(|doc| doc.to_string())
}

/// Convert nfp text to an RGB image.
pub fn nfp_to_image(text: &str) -> Result<RgbImage, CodecError> {
    NfpDecoder::new(COMPUTERCRAFT.clone()).decode(text)
}
