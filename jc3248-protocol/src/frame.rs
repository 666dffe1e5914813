//! Command and response frames for the AXS15231B touch controller.
//!
//! Command format (11 bytes):
//! - MAGIC (6 bytes): B5 AB A5 5A 00 00
//! - LENGTH (2 bytes): expected response length, big-endian
//! - RESERVED (3 bytes): zero
//!
//! Response format (`N * 6 + 2` bytes):
//! - byte 0: unused
//! - byte 1: reported touch count
//! - then one 6-byte record per touch: X_HI, X_LO, Y_HI, Y_LO, 2 unused

/// Maximum simultaneous touches reported by this panel
pub const MAX_TOUCH_POINTS: usize = 1;

/// Bytes before the first touch record
pub const HEADER_LEN: usize = 2;

/// Bytes per touch record
pub const POINT_RECORD_LEN: usize = 6;

/// Command frame length
pub const COMMAND_LEN: usize = 11;

/// Fixed command prefix
pub const COMMAND_MAGIC: [u8; 6] = [0xB5, 0xAB, 0xA5, 0x5A, 0x00, 0x00];

/// Response length for [`MAX_TOUCH_POINTS`]
pub const RESPONSE_LEN: usize = response_len(MAX_TOUCH_POINTS);

/// Field offsets within the response
mod offset {
    pub const COUNT: usize = 1;
    pub const X_HI: usize = 2;
    pub const X_LO: usize = 3;
    pub const Y_HI: usize = 4;
    pub const Y_LO: usize = 5;
}

/// Response length for a controller reporting up to `max_points` touches
pub const fn response_len(max_points: usize) -> usize {
    max_points * POINT_RECORD_LEN + HEADER_LEN
}

/// Errors that can occur during frame parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer bytes than the layout requires
    Short,
    /// Command frame does not start with [`COMMAND_MAGIC`]
    BadMagic,
}

/// The read command written before every response read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadCommand {
    /// Response length the controller should send
    pub response_len: u16,
}

impl Default for ReadCommand {
    fn default() -> Self {
        Self::new(MAX_TOUCH_POINTS)
    }
}

impl ReadCommand {
    /// Build the command for a controller reporting up to `max_points`
    pub const fn new(max_points: usize) -> Self {
        Self {
            response_len: response_len(max_points) as u16,
        }
    }

    /// Encode into the 11-byte wire form
    pub const fn encode(&self) -> [u8; COMMAND_LEN] {
        let len = self.response_len.to_be_bytes();
        [
            COMMAND_MAGIC[0],
            COMMAND_MAGIC[1],
            COMMAND_MAGIC[2],
            COMMAND_MAGIC[3],
            COMMAND_MAGIC[4],
            COMMAND_MAGIC[5],
            len[0],
            len[1],
            0x00,
            0x00,
            0x00,
        ]
    }

    /// Parse a command frame (used by bus simulators)
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < COMMAND_LEN {
            return Err(FrameError::Short);
        }
        if bytes[..COMMAND_MAGIC.len()] != COMMAND_MAGIC {
            return Err(FrameError::BadMagic);
        }
        Ok(Self {
            response_len: u16::from_be_bytes([bytes[6], bytes[7]]),
        })
    }
}

/// Typed view of the first touch record in a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchFrame {
    /// Touch count reported by the controller
    pub count: u8,
    /// 12-bit X in panel orientation
    pub raw_x: u16,
    /// 12-bit Y in panel orientation
    pub raw_y: u16,
}

impl TouchFrame {
    /// Read only the touch count
    ///
    /// Needs just the header, so a no-touch answer can be recognised even
    /// when the rest of the frame is garbage.
    pub fn count(bytes: &[u8]) -> Result<u8, FrameError> {
        bytes.get(offset::COUNT).copied().ok_or(FrameError::Short)
    }

    /// Parse the header and the first touch record
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < offset::Y_LO + 1 {
            return Err(FrameError::Short);
        }

        // Extract 12-bit coordinates (low nibble of HI, all of LO)
        let raw_x = (u16::from(bytes[offset::X_HI] & 0x0F) << 8) | u16::from(bytes[offset::X_LO]);
        let raw_y = (u16::from(bytes[offset::Y_HI] & 0x0F) << 8) | u16::from(bytes[offset::Y_LO]);

        Ok(Self {
            count: bytes[offset::COUNT],
            raw_x,
            raw_y,
        })
    }

    /// Encode into a response buffer (used by bus simulators)
    pub fn encode(&self) -> [u8; RESPONSE_LEN] {
        let mut buf = [0u8; RESPONSE_LEN];
        buf[offset::COUNT] = self.count;
        buf[offset::X_HI] = ((self.raw_x >> 8) & 0x0F) as u8;
        buf[offset::X_LO] = self.raw_x as u8;
        buf[offset::Y_HI] = ((self.raw_y >> 8) & 0x0F) as u8;
        buf[offset::Y_LO] = self.raw_y as u8;
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_command_bytes() {
        let cmd = ReadCommand::default();
        assert_eq!(cmd.response_len, 8);
        assert_eq!(
            cmd.encode(),
            [0xB5, 0xAB, 0xA5, 0x5A, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_read_command_length_is_big_endian() {
        // 50 points * 6 + 2 = 302 = 0x012E
        let bytes = ReadCommand::new(50).encode();
        assert_eq!(bytes[6], 0x01);
        assert_eq!(bytes[7], 0x2E);
    }

    #[test]
    fn test_read_command_parse() {
        let bytes = ReadCommand::default().encode();
        assert_eq!(ReadCommand::parse(&bytes), Ok(ReadCommand::default()));

        let mut bad = bytes;
        bad[0] = 0x00;
        assert_eq!(ReadCommand::parse(&bad), Err(FrameError::BadMagic));
        assert_eq!(ReadCommand::parse(&bytes[..5]), Err(FrameError::Short));
    }

    #[test]
    fn test_response_len() {
        assert_eq!(RESPONSE_LEN, 8);
        assert_eq!(response_len(5), 32);
    }

    #[test]
    fn test_parse_masks_high_nibble() {
        // Upper nibble of X_HI/Y_HI carries event flags and must be ignored
        let frame = [0x00, 0x01, 0xF1, 0x23, 0x82, 0x10, 0x00, 0x00];
        let parsed = TouchFrame::parse(&frame).unwrap();
        assert_eq!(parsed.count, 1);
        assert_eq!(parsed.raw_x, 0x123);
        assert_eq!(parsed.raw_y, 0x210);
    }

    #[test]
    fn test_parse_short_frame() {
        assert_eq!(TouchFrame::parse(&[0, 1, 0, 0]), Err(FrameError::Short));
        assert_eq!(TouchFrame::count(&[0]), Err(FrameError::Short));
        assert_eq!(TouchFrame::count(&[0, 3]), Ok(3));
    }

    #[test]
    fn test_encode_matches_parse_layout() {
        let frame = TouchFrame {
            count: 1,
            raw_x: 0xABC,
            raw_y: 0x0DE,
        };
        let bytes = frame.encode();
        assert_eq!(bytes[2..6], [0x0A, 0xBC, 0x00, 0xDE]);
        assert_eq!(TouchFrame::parse(&bytes), Ok(frame));
    }
}
