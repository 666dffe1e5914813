//! Crate-wide error taxonomy
//!
//! Each subsystem has its own error type that carries detail; all of them
//! collapse into [`Error`] for callers that only care about the category.
//! Nothing in this workspace retries on its own; retry policy is the
//! caller's.

/// Error categories shared by the whole panel stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus or transport failure (I2C NACK, failed read, network down)
    Communication,
    /// Malformed or short frame
    Protocol,
    /// Wall-clock deadline elapsed
    Timeout,
    /// Stream ended before the declared length arrived
    IncompleteTransfer,
    /// Image data could not be decoded
    Decode,
    /// Payload exceeds what the encoder can hold
    PayloadTooLarge,
    /// Staging or decoding buffer could not be allocated
    OutOfMemory,
    /// Caller cancelled the operation
    Cancelled,
}

