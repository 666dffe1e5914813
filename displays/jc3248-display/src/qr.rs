//! QR code renderer
//!
//! Picks a capacity tier from the payload length, has the external encoder
//! build the module grid in a scoped work buffer, then paints background
//! and dark modules through the landscape canvas.
//!
//! | Tier | Payload bytes | Version | Modules |
//! |------|---------------|---------|---------|
//! | A    | 0..=65        | 3       | 29      |
//! | B    | 66..=114      | 4       | 33      |
//! | C    | 115..=154     | 5       | 37      |
//! | D    | 155..=195     | 6       | 41      |
//! | E    | 196..=310     | 8       | 49      |

use alloc::vec::Vec;

use jc3248_core::config::QrConfig;
use jc3248_core::traits::{QrEcc, QrEncodeError, QrEncoder, QrModuleGrid};
use jc3248_core::{color, Error, LogicalPoint, LogicalRect, Rgb565};

use crate::backend::{DisplayError, FrameBufferSink};
use crate::canvas::LandscapeCanvas;

/// Largest payload any tier accepts
pub const MAX_PAYLOAD: usize = 310;

/// Capacity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QrTier {
    A,
    B,
    C,
    D,
    E,
}

impl QrTier {
    /// Tier for a payload of `len` bytes
    pub const fn for_len(len: usize) -> Self {
        match len {
            0..=65 => QrTier::A,
            66..=114 => QrTier::B,
            115..=154 => QrTier::C,
            155..=195 => QrTier::D,
            _ => QrTier::E,
        }
    }

    /// Encoder version used for this tier
    pub const fn version(self) -> u8 {
        match self {
            QrTier::A => 3,
            QrTier::B => 4,
            QrTier::C => 5,
            QrTier::D => 6,
            QrTier::E => 8,
        }
    }

    /// Largest payload this tier is selected for
    pub const fn capacity(self) -> usize {
        match self {
            QrTier::A => 65,
            QrTier::B => 114,
            QrTier::C => 154,
            QrTier::D => 195,
            QrTier::E => MAX_PAYLOAD,
        }
    }
}

/// QR rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QrError {
    /// Payload longer than the largest tier holds
    PayloadTooLarge,
    /// Work buffer could not be allocated
    OutOfMemory,
    /// Module size of zero
    InvalidModuleSize,
    /// Encoder failed for another reason
    Encode(QrEncodeError),
    /// Sink failed while painting
    Display(DisplayError),
}

impl From<QrEncodeError> for QrError {
    fn from(e: QrEncodeError) -> Self {
        match e {
            QrEncodeError::DataTooLong => QrError::PayloadTooLarge,
            other => QrError::Encode(other),
        }
    }
}

impl From<DisplayError> for QrError {
    fn from(e: DisplayError) -> Self {
        QrError::Display(e)
    }
}

impl From<QrError> for Error {
    fn from(e: QrError) -> Self {
        match e {
            QrError::PayloadTooLarge => Error::PayloadTooLarge,
            QrError::OutOfMemory => Error::OutOfMemory,
            QrError::InvalidModuleSize => Error::Protocol,
            QrError::Encode(e) => e.into(),
            QrError::Display(e) => e.into(),
        }
    }
}

/// What was painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QrLayout {
    pub tier: QrTier,
    /// Modules per side
    pub modules: u16,
    /// Logical square covered, background included
    pub area: LogicalRect,
}

/// Paints QR codes with an external encoder
pub struct QrRenderer<E: QrEncoder> {
    encoder: E,
    ecc: QrEcc,
}

impl<E: QrEncoder> QrRenderer<E> {
    /// Renderer at the lowest error-correction level
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            ecc: QrEcc::Low,
        }
    }

    /// Use a different error-correction level
    pub fn with_ecc(mut self, ecc: QrEcc) -> Self {
        self.ecc = ecc;
        self
    }

    /// Render with colors and module size from configuration
    pub fn render_with<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
        payload: &[u8],
        origin: LogicalPoint,
        config: &QrConfig,
    ) -> Result<QrLayout, QrError> {
        self.render(
            canvas,
            payload,
            origin,
            u16::from(config.module_size),
            color::rgb_triple(config.background),
            color::rgb_triple(config.foreground),
        )
    }

    /// Paint `payload` as a QR code with its top-left corner at `origin`
    ///
    /// Oversized payloads and allocation failures are reported before
    /// anything is drawn.
    pub fn render<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
        payload: &[u8],
        origin: LogicalPoint,
        module_size: u16,
        background: Rgb565,
        foreground: Rgb565,
    ) -> Result<QrLayout, QrError> {
        if module_size == 0 {
            return Err(QrError::InvalidModuleSize);
        }
        if payload.len() > MAX_PAYLOAD {
            #[cfg(feature = "defmt")]
            defmt::warn!("QR payload of {} bytes exceeds {}", payload.len(), MAX_PAYLOAD);
            return Err(QrError::PayloadTooLarge);
        }

        let tier = QrTier::for_len(payload.len());
        let version = tier.version();
        let buffer_len = self.encoder.buffer_size_for(version);

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(buffer_len)
            .map_err(|_| QrError::OutOfMemory)?;
        buffer.resize(buffer_len, 0u8);

        let grid = self
            .encoder
            .encode_text(&mut buffer, version, self.ecc, payload)?;
        let modules = grid.size();

        #[cfg(feature = "defmt")]
        defmt::info!("QR version {}, size {}x{}", version, modules, modules);

        let step = i32::from(module_size);
        let side = i32::from(modules) * step;
        let area = LogicalRect::at(origin, side, side);
        canvas.fill_rect(area, background)?;

        // Light modules stay background
        for my in 0..modules {
            for mx in 0..modules {
                if grid.module_at(mx, my) {
                    let cell = LogicalRect::at(
                        origin.offset(i32::from(mx) * step, i32::from(my) * step),
                        step,
                        step,
                    );
                    canvas.fill_rect(cell, foreground)?;
                }
            }
        }
        canvas.flush()?;

        Ok(QrLayout {
            tier,
            modules,
            area,
        })
    }
}
