//! Palette types and utilities
//!
//! This module provides the fixed 16-entry nfp palette, its code characters,
//! and the error type for palette construction and code lookup.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, BACKGROUND_INDEX, CODES, COMPUTERCRAFT, PALETTE_SIZE};
