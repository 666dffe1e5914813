//! Hardware configuration types
//!
//! Pins, bus addresses and panel geometry for the touch controller and the
//! display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use jc3248_protocol::TouchFilter;

use crate::geometry::{PANEL_HEIGHT, PANEL_WIDTH};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// Panel (framebuffer) configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    /// Backlight enable pin
    pub backlight: PinConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH as u16,
            height: PANEL_HEIGHT as u16,
            backlight: PinConfig::new(1),
        }
    }
}

/// Touch controller (digitizer) configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// I2C clock in Hz
    pub i2c_frequency: u32,
    /// I2C data pin
    pub sda: PinConfig,
    /// I2C clock pin
    pub scl: PinConfig,
    /// Controller reset pin (active-low)
    pub reset: PinConfig,
    /// Touch interrupt pin
    pub interrupt: PinConfig,
    /// Time reset is held low during bring-up
    pub reset_low_ms: u32,
    /// Settle time after reset is released
    pub reset_high_ms: u32,
    /// Raw value reported on both axes while idle
    pub idle_sentinel: u16,
    /// Raw coordinates above this are dropped as noise
    pub noise_limit: u16,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            address: 0x3B,
            i2c_frequency: 400_000,
            sda: PinConfig::new(4),
            scl: PinConfig::new(8),
            reset: PinConfig::inverted(12),
            interrupt: PinConfig::with_pullup(11),
            reset_low_ms: 200,
            reset_high_ms: 200,
            idle_sentinel: jc3248_protocol::touch::IDLE_SENTINEL,
            noise_limit: jc3248_protocol::touch::NOISE_LIMIT,
        }
    }
}

impl TouchConfig {
    /// Frame validation thresholds for the decoder
    pub fn filter(&self) -> TouchFilter {
        TouchFilter {
            idle_sentinel: self.idle_sentinel,
            noise_limit: self.noise_limit,
            ..TouchFilter::default()
        }
    }
}
