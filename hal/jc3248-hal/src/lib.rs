//! JC3248 Hardware Abstraction Layer
//!
//! This crate defines the capabilities the panel stack consumes but never
//! implements itself. Board support code (ESP32-S3 WiFi/HTTP client, SPIFFS,
//! a hardware timer) implements them; tests implement them in memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  jc3248-drivers / jc3248-display        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  jc3248-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┼───────────┐
//!         ▼           ▼           ▼
//!   HTTP client   flash FS    system timer
//! ```
//!
//! # Traits
//!
//! - [`net::NetworkSource`] - Blocking HTTP body stream
//! - [`staging::StagingStore`] - Temporary byte objects (download staging)
//! - [`clock::Clock`] - Monotonic milliseconds and short idle waits
//!
//! The touch bus and reset pin are taken straight from `embedded-hal`.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod net;
pub mod staging;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use net::{NetError, NetworkSource, Response};
pub use staging::{StagingError, StagingStore};
