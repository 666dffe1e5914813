//! Cooperative cancellation
//!
//! Long paint calls (the image pipeline in particular) check a
//! [`CancelToken`] at every suspension point. The token can be tripped from
//! an interrupt handler or another task; the paint call notices at its next
//! check and fails with a placeholder.

use core::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Re-arm the token for the next operation
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
