//! Capability traits
//!
//! These traits define the interface between the panel logic and the
//! external collaborators that do the heavy lifting (JPEG math, QR
//! Reed-Solomon). The framebuffer sink lives in `jc3248-display`.

pub mod decoder;
pub mod qr;

pub use decoder::{BlockImageDecoder, BlockSource, DecodeError, PixelBlock};
pub use qr::{QrEcc, QrEncodeError, QrEncoder, QrModuleGrid};
