//! QR encoder trait
//!
//! The bit-matrix encoder is an external collaborator. It works in a
//! caller-provided buffer sized by [`QrEncoder::buffer_size_for`], so the
//! renderer controls (and releases) the allocation.

use crate::error::Error;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QrEcc {
    /// ~7% recovery
    #[default]
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

/// Errors reported by a QR encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QrEncodeError {
    /// Text does not fit the requested version
    DataTooLong,
    /// Work buffer shorter than `buffer_size_for(version)`
    BufferTooSmall,
    /// Version outside 1..=40
    InvalidVersion,
}

impl From<QrEncodeError> for Error {
    fn from(e: QrEncodeError) -> Self {
        match e {
            QrEncodeError::DataTooLong => Error::PayloadTooLarge,
            QrEncodeError::BufferTooSmall => Error::OutOfMemory,
            QrEncodeError::InvalidVersion => Error::Protocol,
        }
    }
}

/// Square grid of QR modules
pub trait QrModuleGrid {
    /// Side length in modules
    fn size(&self) -> u16;

    /// Check if the module at `(x, y)` is dark
    fn module_at(&self, x: u16, y: u16) -> bool;
}

/// QR bit-matrix encoder
pub trait QrEncoder {
    /// Module grid living in the caller's work buffer
    type Grid<'a>: QrModuleGrid
    where
        Self: 'a;

    /// Bytes of work buffer needed for `version`
    fn buffer_size_for(&self, version: u8) -> usize;

    /// Encode `text` at a fixed `version`
    fn encode_text<'a>(
        &'a self,
        buffer: &'a mut [u8],
        version: u8,
        ecc: QrEcc,
        text: &[u8],
    ) -> Result<Self::Grid<'a>, QrEncodeError>;
}
