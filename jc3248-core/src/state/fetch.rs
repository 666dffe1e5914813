//! Progress bookkeeping for one pipeline run

use super::events::FetchEvent;
use super::machine::Stage;

/// Stage plus byte counters
///
/// `bytes_read <= bytes_expected` holds after every method call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageFetchState {
    stage: Stage,
    bytes_expected: u64,
    bytes_read: u64,
}

impl ImageFetchState {
    /// Create an idle state with zeroed counters
    pub const fn new() -> Self {
        Self {
            stage: Stage::Idle,
            bytes_expected: 0,
            bytes_read: 0,
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Declared body length
    pub fn bytes_expected(&self) -> u64 {
        self.bytes_expected
    }

    /// Body bytes staged so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bytes still owed by the server
    pub fn remaining(&self) -> u64 {
        self.bytes_expected - self.bytes_read
    }

    /// Check if every declared byte has been staged
    pub fn is_complete(&self) -> bool {
        self.bytes_expected > 0 && self.bytes_read == self.bytes_expected
    }

    /// Apply a stage event
    ///
    /// Returns the new stage. Counters reset when the machine returns to
    /// `Idle`.
    pub fn apply(&mut self, event: FetchEvent) -> Stage {
        self.stage = self.stage.transition(event);
        if self.stage == Stage::Idle {
            self.bytes_expected = 0;
            self.bytes_read = 0;
        }
        self.stage
    }

    /// Record the declared body length at the start of the download
    pub fn begin_download(&mut self, bytes_expected: u64) {
        self.bytes_expected = bytes_expected;
        self.bytes_read = 0;
    }

    /// Record a staged chunk
    ///
    /// Bytes beyond the declared length are not counted.
    pub fn record_chunk(&mut self, len: usize) {
        self.bytes_read = self
            .bytes_read
            .saturating_add(len as u64)
            .min(self.bytes_expected);
    }

    /// Download progress scaled to `0..=scale`
    pub fn progress(&self, scale: u32) -> u32 {
        if self.bytes_expected == 0 {
            return 0;
        }
        // bytes_read <= bytes_expected, so the quotient is <= scale
        ((u128::from(self.bytes_read) * u128::from(scale)) / u128::from(self.bytes_expected)) as u32
    }

    /// Download progress in percent
    pub fn percent(&self) -> u8 {
        self.progress(100) as u8
    }
}
