use image::ImageFormat;
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Raster format used when writing decoded nfp files.
///
/// Parsed from a format name such as `PNG` or `jpeg`. Case is ignored and
/// spaces are stripped, so `"Tiff "` and `"TIFF"` are the same format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    name: String,
    format: ImageFormat,
}

impl OutputFormat {
    /// Normalised format name, e.g. `JPEG`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_format(&self) -> ImageFormat {
        self.format
    }

    /// Extension used when `--extension` is not given: the normalised
    /// name lowercased (`JPG` → `jpg`, `JPEG` → `jpeg`).
    pub fn default_extension(&self) -> String {
        self.name.to_lowercase()
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            name: "PNG".to_string(),
            format: ImageFormat::Png,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        let format = match name.as_str() {
            "PNG" => ImageFormat::Png,
            "JPEG" | "JPG" => ImageFormat::Jpeg,
            "GIF" => ImageFormat::Gif,
            "BMP" => ImageFormat::Bmp,
            "TIFF" | "TIF" => ImageFormat::Tiff,
            "WEBP" => ImageFormat::WebP,
            "ICO" => ImageFormat::Ico,
            "TGA" => ImageFormat::Tga,
            "PNM" | "PPM" => ImageFormat::Pnm,
            _ => return Err(ConvertError::UnsupportedFormat(s.to_string())),
        };

        Ok(Self { name, format })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
