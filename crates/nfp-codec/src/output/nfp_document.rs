//! NfpDocument: a grid of palette indices with nfp text conversion.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;

use crate::api::CodecError;
use crate::palette::{Palette, BACKGROUND_INDEX, CODES};

/// An nfp paint document.
///
/// Stores one palette index per cell, row by row. Rows may differ in length;
/// the document width is the longest row and missing cells read as the
/// background entry.
///
/// Printing (`Display`) writes one code per cell and joins rows with `\n`,
/// with no trailing newline. Parsing accepts `\n` or `\r\n` and ignores
/// trailing whitespace on each row and at the end of the text.
///
/// # Example
///
/// ```
/// use nfp_codec::NfpDocument;
///
/// let doc: NfpDocument = "0f\r\ne\n".parse().unwrap();
/// assert_eq!((doc.width(), doc.height()), (2, 2));
/// assert_eq!(doc.index_at(1, 1), 0); // padded with background
/// assert_eq!(doc.to_string(), "0f\ne");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfpDocument {
    rows: Vec<Vec<u8>>,
}

impl NfpDocument {
    /// Build a document from row-major indices of a `width`-wide grid.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `width > 0`, that `indices.len()` is a multiple
    /// of `width`, and that every index is a valid palette index.
    pub fn from_indices(indices: &[u8], width: usize) -> Self {
        debug_assert!(width > 0, "width must be non-zero");
        debug_assert_eq!(
            indices.len() % width,
            0,
            "indices length ({}) must be a multiple of width ({})",
            indices.len(),
            width
        );
        debug_assert!(indices.iter().all(|&i| (i as usize) < CODES.len()));
        Self {
            rows: indices.chunks(width).map(<[u8]>::to_vec).collect(),
        }
    }

    /// Parse nfp text.
    ///
    /// # Errors
    ///
    /// - [`CodecError::EmptyDocument`] if no rows remain once trailing
    ///   whitespace is removed
    /// - [`CodecError::InvalidCode`] for the first character that is not a
    ///   palette code, with its 0-based row and column
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let text = text.trim_end();
        if text.is_empty() {
            return Err(CodecError::EmptyDocument);
        }

        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let cells = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(column, code)| {
                    Palette::index_of(code)
                        .map(|i| i as u8)
                        .map_err(|_| CodecError::InvalidCode { row, column, code })
                })
                .collect::<Result<Vec<u8>, CodecError>>()?;
            rows.push(cells);
        }

        Ok(Self { rows })
    }

    /// Width in cells: the length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Height in cells: the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The rows as stored, without padding.
    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Whether every row has the same length.
    pub fn is_uniform(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Palette index at `(x, y)`, or the background index past the end of a
    /// short row or below the last row.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(BACKGROUND_INDEX as u8)
    }

    /// Render to an RGB raster, one pixel per cell.
    pub fn render(&self, palette: &Palette) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            palette.color(self.index_at(x as usize, y as usize) as usize)
        })
    }
}

impl fmt::Display for NfpDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            let line: String = row.iter().map(|&i| CODES[i as usize]).collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

impl FromStr for NfpDocument {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
