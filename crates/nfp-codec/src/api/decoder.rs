//! NfpDecoder, the nfp → image entry point.

use image::RgbImage;

use super::CodecError;
use crate::output::NfpDocument;
use crate::palette::Palette;

/// nfp → image decoder.
///
/// Renders each cell as one pixel of its palette color. No resizing or other
/// post-processing happens here.
///
/// # Example
///
/// ```
/// use image::Rgb;
/// use nfp_codec::{NfpDecoder, Palette};
///
/// let image = NfpDecoder::new(Palette::default()).decode("f\nfe").unwrap();
///
/// assert_eq!(image.dimensions(), (2, 2));
/// assert_eq!(*image.get_pixel(1, 0), Rgb([240, 240, 240])); // background
/// assert_eq!(*image.get_pixel(1, 1), Rgb([204, 76, 76]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NfpDecoder {
    palette: Palette,
}

impl NfpDecoder {
    /// Create a decoder rendering against `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette cells are rendered with.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Parse and render nfp text.
    ///
    /// # Errors
    ///
    /// - [`CodecError::EmptyDocument`] if the text has no rows
    /// - [`CodecError::InvalidCode`] if any character is not a palette code
    pub fn decode(&self, text: &str) -> Result<RgbImage, CodecError> {
        let document = NfpDocument::parse(text)?;
        Ok(self.render(&document))
    }

    /// Render an already parsed document.
    pub fn render(&self, document: &NfpDocument) -> RgbImage {
        document.render(&self.palette)
    }
}
