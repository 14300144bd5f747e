//! Public API for the nfp-codec crate.
//!
//! [`NfpEncoder`] (image → nfp) and [`NfpDecoder`] (nfp → image) are the
//! configurable entry points; [`image_to_nfp`] and [`nfp_to_image`] cover the
//! common case against the ComputerCraft palette. [`CodecError`] is the
//! unified error type.

mod builder;
mod convert;
mod decoder;
mod error;

pub use builder::NfpEncoder;
pub use convert::{image_to_nfp, nfp_to_image};
pub use decoder::NfpDecoder;
pub use error::CodecError;
