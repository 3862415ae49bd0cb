// libavrc/src/lib.rs

//! libavrc
//!
//! Pure Rust decoder for AVRCP controller responses.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod observer;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
