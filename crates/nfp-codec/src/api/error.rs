//! Unified error type for the nfp-codec public API.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the nfp-codec public API.
///
/// Every variant is terminal for the conversion in progress; nothing is
/// partially produced and nothing is retried.
///
/// # Example
///
/// ```
/// use nfp_codec::{nfp_to_image, CodecError};
///
/// let err = nfp_to_image("00\n0x").unwrap_err();
/// assert_eq!(err, CodecError::InvalidCode { row: 1, column: 1, code: 'x' });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// nfp text contains a character outside the 16 palette codes.
    ///
    /// `row` and `column` are 0-based; `column` counts characters.
    InvalidCode {
        /// Row of the offending character
        row: usize,
        /// Column of the offending character
        column: usize,
        /// The offending character
        code: char,
    },
    /// Image to encode (or the requested resize target) has a zero dimension.
    EmptyImage {
        /// Width of the empty image
        width: u32,
        /// Height of the empty image
        height: u32,
    },
    /// nfp text has no rows.
    EmptyDocument,
    /// Palette construction or lookup error.
    Palette(PaletteError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidCode { row, column, code } => write!(
                f,
                "invalid palette code {:?} at line {}, column {}",
                code,
                row + 1,
                column + 1
            ),
            CodecError::EmptyImage { width, height } => {
                write!(f, "cannot encode an empty {}x{} image", width, height)
            }
            CodecError::EmptyDocument => write!(f, "nfp document has no rows"),
            CodecError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for CodecError {
    fn from(err: PaletteError) -> Self {
        CodecError::Palette(err)
    }
}
