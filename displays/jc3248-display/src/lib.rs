//! Landscape drawing for the JC3248 panel
//!
//! This crate provides:
//! - `FrameBufferSink`, the pixel-write capability of the panel driver
//! - `LandscapeCanvas`, which draws in 480x320 logical coordinates on the
//!   320x480 portrait panel
//! - Status placeholders and the download progress bar
//! - The QR code renderer
//!
//! # Architecture
//!
//! The panel driver itself (QSPI bus, init sequence, rasterizers) is
//! supplied by the board and only has to implement `FrameBufferSink` in
//! native coordinates. Callers never see portrait geometry: every primitive
//! passes through the coordinate mapper in `jc3248-core` on its way down.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod canvas;
pub mod placeholder;
pub mod qr;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use backend::{DisplayError, FrameBufferSink, Rotation};
pub use canvas::{LandscapeCanvas, LandscapeTarget};
pub use placeholder::{Placeholder, ProgressBar};
pub use qr::{QrError, QrLayout, QrRenderer, QrTier, MAX_PAYLOAD};
