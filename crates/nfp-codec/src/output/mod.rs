//! Output types for the codec.
//!
//! [`NfpDocument`] is the canonical grid of palette indices. It prints as nfp
//! text and renders to an RGB raster against a palette.

mod nfp_document;

pub use nfp_document::NfpDocument;
