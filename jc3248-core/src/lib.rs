//! Board-agnostic core logic for the JC3248 rotated touch panel
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Logical/physical geometry and the fixed 90° coordinate mapper
//! - Capability traits for the block image decoder and QR encoder
//! - The image fetch state machine
//! - Cancellation token for long-running paint calls
//! - Configuration type definitions (optionally loaded from TOML)
//! - The crate-wide error taxonomy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cancel;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod state;
pub mod traits;

pub use cancel::CancelToken;
pub use color::{rgb, Rgb565};
pub use error::Error;
pub use geometry::{
    CoordinateMapper, LogicalPoint, LogicalRect, PhysicalPoint, PhysicalRect, LOGICAL_HEIGHT,
    LOGICAL_WIDTH, PANEL_HEIGHT, PANEL_WIDTH,
};
