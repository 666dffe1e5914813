//! Digitizer reset sequencing
//!
//! The controller must see its reset line held asserted, then released,
//! with a settle delay on each side, before it answers on the bus.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use jc3248_core::config::TouchConfig;

/// A way of hard-resetting the touch controller
pub trait ResetSequence {
    type Error;

    /// Run the full reset, blocking on `delay`
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Reset through a GPIO
///
/// The pin can be configured as active-low (the JC3248 default) or
/// active-high.
pub struct PinResetSequence<P> {
    pin: P,
    /// If true, reset asserted = pin LOW
    inverted: bool,
    low_ms: u32,
    high_ms: u32,
}

impl<P: OutputPin> PinResetSequence<P> {
    /// Create a sequence with explicit timing
    ///
    /// # Arguments
    /// - `pin`: The reset GPIO
    /// - `inverted`: If true, reset is asserted by driving the pin LOW
    /// - `low_ms`: Time reset is held asserted
    /// - `high_ms`: Settle time after release
    pub fn new(pin: P, inverted: bool, low_ms: u32, high_ms: u32) -> Self {
        Self {
            pin,
            inverted,
            low_ms,
            high_ms,
        }
    }

    /// Create a sequence from the board's touch configuration
    pub fn from_config(pin: P, config: &TouchConfig) -> Self {
        Self::new(
            pin,
            config.reset.inverted,
            config.reset_low_ms,
            config.reset_high_ms,
        )
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }

    fn set_asserted(&mut self, asserted: bool) -> Result<(), P::Error> {
        if asserted != self.inverted {
            // Active-high asserted, or active-low released
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

impl<P: OutputPin> ResetSequence for PinResetSequence<P> {
    type Error = P::Error;

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.set_asserted(true)?;
        delay.delay_ms(self.low_ms);
        self.set_asserted(false)?;
        delay.delay_ms(self.high_ms);
        Ok(())
    }
}

/// For boards whose reset line is driven by a supervisor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReset;

impl ResetSequence for NoReset {
    type Error = Infallible;

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        Ok(())
    }
}
