//! Bilinear resize.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::TargetSize;

/// Resize `image` to exactly `target` using bilinear (triangle) filtering.
///
/// Always returns a new image; the source is never modified. When the
/// dimensions already match, the result is a plain copy so quantization
/// sees the original pixels.
///
/// The caller must reject empty sources and targets first.
pub fn resize_bilinear(image: &RgbImage, target: TargetSize) -> RgbImage {
    if image.dimensions() == (target.width, target.height) {
        return image.clone();
    }
    imageops::resize(image, target.width, target.height, FilterType::Triangle)
}
