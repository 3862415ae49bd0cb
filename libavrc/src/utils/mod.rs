//! Utilities for libavrc: small, reusable helpers used across the crate.
//!
//! Currently only the hex helper used when tracing attribute text.

pub mod hex;

pub use hex::*;
