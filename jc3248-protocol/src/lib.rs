//! AXS15231B Touch Protocol
//!
//! This crate defines the I2C exchange with the touch half of the AXS15231B
//! controller on the JC3248W535EN board. It is pure: no bus access, only
//! frame layout and validation, so it can be tested on the host.
//!
//! # Protocol Overview
//!
//! The host writes a fixed 11-byte read command, then reads a response of
//! `N * 6 + 2` bytes where `N` is the maximum number of simultaneous touches
//! (1 on this panel):
//!
//! ```text
//! command:
//! ┌────┬────┬────┬────┬────┬────┬────────┬────────┬────┬────┬────┐
//! │ B5 │ AB │ A5 │ 5A │ 00 │ 00 │ LEN_HI │ LEN_LO │ 00 │ 00 │ 00 │
//! └────┴────┴────┴────┴────┴────┴────────┴────────┴────┴────┴────┘
//!
//! response (N = 1):
//! ┌────┬───────┬──────┬──────┬──────┬──────┬────┬────┐
//! │ -- │ COUNT │ X_HI │ X_LO │ Y_HI │ Y_LO │ -- │ -- │
//! └────┴───────┴──────┴──────┴──────┴──────┴────┴────┘
//! ```
//!
//! Coordinates are 12 bits: the low nibble of the `_HI` byte and the whole
//! `_LO` byte. The controller reports in panel orientation; [`decode`]
//! returns landscape coordinates.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod touch;

pub use frame::{
    FrameError, ReadCommand, TouchFrame, COMMAND_LEN, COMMAND_MAGIC, MAX_TOUCH_POINTS,
    RESPONSE_LEN,
};
pub use touch::{decode, decode_with, linear_map, TouchFilter, TouchResult, TouchSample};
