//! AXS15231B digitizer
//!
//! Polled over I2C: write the 11-byte read command, then read the
//! `N * 6 + 2` byte response and hand it to the pure decoder in
//! `jc3248-protocol`.

mod axs15231;
mod reset;

pub use axs15231::{Axs15231Touch, TouchError};
pub use reset::{NoReset, PinResetSequence, ResetSequence};
