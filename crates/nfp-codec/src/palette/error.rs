//! Error types for palette operations

use std::fmt;

/// Error type for palette validation and code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Palette does not have exactly one color per code
    WrongLength {
        /// Number of codes in the nfp format
        expected: usize,
        /// Number of colors supplied
        actual: usize,
    },
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Character is not one of the 16 palette codes
    InvalidCode {
        /// The offending character
        code: char,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongLength { expected, actual } => {
                write!(
                    f,
                    "palette must have {} colors, got {}",
                    expected, actual
                )
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::InvalidCode { code } => {
                write!(f, "invalid palette code {:?}", code)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
