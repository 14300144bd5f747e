//! nfpconv - ComputerCraft nfp converter
//!
//! File-level glue around the `nfp-codec` crate: configuration, batch
//! discovery and the concurrent conversion loop.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
