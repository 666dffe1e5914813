//! Time source abstraction
//!
//! The image pipeline bounds its download with a wall-clock deadline and
//! yields briefly while the network stack has nothing buffered.

/// Monotonic clock with a blocking delay
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch (e.g. boot)
    ///
    /// Must never go backwards.
    fn now_ms(&self) -> u64;

    /// Block for roughly `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `start` (a previous [`Clock::now_ms`] value)
    fn elapsed_since(&self, start: u64) -> u64 {
        self.now_ms().saturating_sub(start)
    }
}
