//! Configuration types
//!
//! Board-agnostic configuration structures. Every struct has a `Default`
//! matching the JC3248W535EN board, so a missing config file (or a missing
//! key in one) falls back to working values.

pub mod hardware;
#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

pub use hardware::*;
pub use types::*;
