//! nfp-codec: conversion between ComputerCraft nfp paint documents and RGB
//! rasters
//!
//! An nfp document is plain text: one palette code (`0`-`9`, `a`-`f`) per
//! cell, rows separated by newlines. This crate maps arbitrary RGB images
//! onto that 16-color grid and back.
//!
//! # Quick Start
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use nfp_codec::{image_to_nfp, nfp_to_image};
//!
//! let image = RgbImage::from_pixel(328, 162, Rgb([204, 76, 76]));
//! let text = image_to_nfp(&image, Some((164, 81)), true).unwrap();
//! assert!(text.lines().all(|row| row == "e".repeat(164)));
//!
//! let back = nfp_to_image(&text).unwrap();
//! assert_eq!(back.dimensions(), (164, 81));
//! ```
//!
//! # Builder API
//!
//! [`NfpEncoder`] and [`NfpDecoder`] take an explicit [`Palette`] and expose
//! the resize, dithering and kernel choices:
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use nfp_codec::{DitherAlgorithm, NfpEncoder, Palette};
//!
//! let encoder = NfpEncoder::new(Palette::default())
//!     .resize(8, 4)
//!     .dither(true)
//!     .algorithm(DitherAlgorithm::Atkinson);
//!
//! let gradient = RgbImage::from_fn(64, 32, |x, _| Rgb([x as u8 * 4, x as u8 * 4, x as u8 * 4]));
//! let doc = encoder.encode(&gradient).unwrap();
//! assert_eq!((doc.width(), doc.height()), (8, 4));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbImage ──resize (bilinear, optional)──▶ RgbImage
//!          ──quantize──────────────────────▶ palette indices
//!                 ├─ NearestColor          (per pixel, independent)
//!                 └─ error diffusion       (single raster-order sweep)
//!          ──assemble──────────────────────▶ NfpDocument ──Display──▶ nfp text
//!
//! nfp text ──parse──▶ NfpDocument ──render (1 pixel per cell)──▶ RgbImage
//! ```
//!
//! # Color Matching
//!
//! Nearest color is squared Euclidean distance over the 8-bit RGB channels,
//! with ties resolved to the lowest palette index. Error diffusion computes
//! the residual in the same space: `pixel + accumulated - palette[idx]`.
//!
//! Every palette color is its own nearest match, so decoding and then
//! re-encoding without dithering reproduces a uniform-width document
//! exactly. The opposite direction is lossy.

pub mod api;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{image_to_nfp, nfp_to_image, CodecError, NfpDecoder, NfpEncoder};
pub use dither::{DitherAlgorithm, DitherOptions, ParseAlgorithmError};
pub use output::NfpDocument;
pub use palette::{Palette, PaletteError, COMPUTERCRAFT};
pub use preprocess::TargetSize;
