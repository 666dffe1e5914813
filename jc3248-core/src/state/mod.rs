//! Image fetch state machine
//!
//! Defines the lifecycle of one image pipeline invocation. The machine is
//! explicit, finite, and monotonic: stages only move forward, and any
//! non-terminal stage can fail.

pub mod events;
pub mod fetch;
pub mod machine;

pub use events::FetchEvent;
pub use fetch::ImageFetchState;
pub use machine::{FailKind, Stage};
