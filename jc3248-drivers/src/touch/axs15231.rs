//! AXS15231B I2C driver

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as I2cError, ErrorKind, I2c, NoAcknowledgeSource};
use jc3248_core::config::TouchConfig;
use jc3248_core::Error;
use jc3248_protocol::{decode_with, ReadCommand, TouchFilter, TouchResult, TouchSample};
use jc3248_protocol::{COMMAND_LEN, RESPONSE_LEN};

use super::reset::ResetSequence;

/// Touch transaction failures
///
/// These are bus problems. A quiet panel is `Ok(TouchResult::NoTouch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError<E> {
    /// The read command was not acknowledged
    Write(E),
    /// The response read failed or came back short
    Read(E),
    /// The reset sequence failed to drive its pin
    Reset,
}

impl<E: I2cError> TouchError<E> {
    /// Bus error category, if this came from the bus
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            TouchError::Write(e) | TouchError::Read(e) => Some(e.kind()),
            TouchError::Reset => None,
        }
    }

    /// Check if the controller did not answer its address
    pub fn is_address_nack(&self) -> bool {
        matches!(
            self.kind(),
            Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        )
    }
}

impl<E> From<TouchError<E>> for Error {
    fn from(_: TouchError<E>) -> Self {
        Error::Communication
    }
}

/// AXS15231B touch controller on an I2C bus
pub struct Axs15231Touch<I2C> {
    i2c: I2C,
    address: u8,
    command: [u8; COMMAND_LEN],
    filter: TouchFilter,
}

impl<I2C: I2c> Axs15231Touch<I2C> {
    /// Create a driver using the board configuration
    pub fn new(i2c: I2C, config: &TouchConfig) -> Self {
        let filter = config.filter();
        Self {
            i2c,
            address: config.address,
            command: ReadCommand::default().encode(),
            filter,
        }
    }

    /// Hard-reset the controller
    ///
    /// Must run once after power-up before the first poll.
    pub fn init<R, D>(&mut self, reset: &mut R, delay: &mut D) -> Result<(), TouchError<I2C::Error>>
    where
        R: ResetSequence,
        D: DelayNs,
    {
        reset.reset(delay).map_err(|_| TouchError::Reset)?;

        #[cfg(feature = "defmt")]
        defmt::info!("Touch controller reset at {=u8:#x}", self.address);

        Ok(())
    }

    /// Run one command/response transaction and return the raw frame
    pub fn read_frame(&mut self) -> Result<[u8; RESPONSE_LEN], TouchError<I2C::Error>> {
        self.i2c
            .write(self.address, &self.command)
            .map_err(TouchError::Write)?;

        let mut frame = [0u8; RESPONSE_LEN];
        self.i2c
            .read(self.address, &mut frame)
            .map_err(TouchError::Read)?;
        Ok(frame)
    }

    /// Poll the controller
    pub fn read_touch(&mut self) -> Result<TouchResult, TouchError<I2C::Error>> {
        let frame = match self.read_frame() {
            Ok(frame) => frame,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Touch bus error");
                return Err(e);
            }
        };
        Ok(decode_with(&frame, &self.filter))
    }

    /// Poll the controller, collapsing everything but a touch to `None`
    pub fn touch_point(&mut self) -> Result<Option<TouchSample>, TouchError<I2C::Error>> {
        Ok(self.read_touch()?.sample())
    }

    /// Validation thresholds in use
    pub fn filter(&self) -> &TouchFilter {
        &self.filter
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}
