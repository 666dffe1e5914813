//! Hardware-facing components of the JC3248 panel stack
//!
//! - AXS15231B touch controller over `embedded-hal` I2C, with an injected
//!   reset sequence
//! - The image stream pipeline (network → staging → block decode → blit)

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod image;
pub mod touch;

#[cfg(test)]
pub(crate) mod mock;

pub use image::{ImageError, ImagePipeline, ImageReport};
pub use touch::{Axs15231Touch, NoReset, PinResetSequence, ResetSequence, TouchError};
