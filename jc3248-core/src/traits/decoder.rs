//! Block image decoder trait
//!
//! Block-oriented decoders (baseline JPEG) emit the image one MCU at a time,
//! so a 480x320 picture never needs a full decoded bitmap in RAM.

use embedded_graphics_core::pixelcolor::Rgb565;

use crate::error::Error;

/// Errors reported by a block decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Stream is corrupt or truncated
    Malformed,
    /// Valid stream in a flavor the decoder does not handle (progressive, CMYK)
    Unsupported,
    /// Decoder working memory could not be allocated
    OutOfMemory,
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::OutOfMemory => Error::OutOfMemory,
            DecodeError::Malformed | DecodeError::Unsupported => Error::Decode,
        }
    }
}

/// One decoded block (MCU)
///
/// Borrowed from the decoder's internal buffer and only valid until the
/// next call to [`BlockSource::next_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBlock<'a> {
    /// Column of this block in the block grid
    pub block_x: u16,
    /// Row of this block in the block grid
    pub block_y: u16,
    /// Pixel width, already clipped at the right image edge
    pub width: u16,
    /// Pixel height, already clipped at the bottom image edge
    pub height: u16,
    /// Row-major pixels, `width` per row
    pub pixels: &'a [Rgb565],
}

impl<'a> PixelBlock<'a> {
    /// Number of pixels the block claims to carry
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that `pixels` is long enough for `width * height`
    pub fn is_complete(&self) -> bool {
        self.pixels.len() >= self.pixel_count()
    }
}

/// Lazy, finite, non-restartable sequence of decoded blocks
///
/// Dropping the source releases the decoder's working memory.
pub trait BlockSource {
    /// Image width in pixels
    fn width(&self) -> u16;

    /// Image height in pixels
    fn height(&self) -> u16;

    /// Nominal block (MCU) size in pixels, `(width, height)`
    fn block_size(&self) -> (u16, u16);

    /// Decode the next block
    ///
    /// Returns `Ok(None)` once the image is exhausted.
    fn next_block(&mut self) -> Result<Option<PixelBlock<'_>>, DecodeError>;
}

/// Block image decoder
pub trait BlockImageDecoder {
    /// Block sequence borrowed from the decoder and the input bytes
    type Source<'a>: BlockSource
    where
        Self: 'a;

    /// Parse the header of `data` and prepare to emit blocks
    fn decode<'a>(&'a mut self, data: &'a [u8]) -> Result<Self::Source<'a>, DecodeError>;
}
