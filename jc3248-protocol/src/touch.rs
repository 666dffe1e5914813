//! Touch response validation and orientation remap

use crate::frame::{FrameError, TouchFrame, MAX_TOUCH_POINTS};

/// Raw value the controller reports on both axes while idle
pub const IDLE_SENTINEL: u16 = 273;

/// Raw values above this are electrical noise
pub const NOISE_LIMIT: u16 = 4000;

/// Raw X span that maps onto the logical Y axis
pub const SENSOR_SPAN: u16 = 320;

/// A validated touch in logical (landscape) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub x: u16,
    pub y: u16,
}

/// Outcome of decoding one response frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchResult {
    /// No finger down (or a sample rejected as idle/noise)
    NoTouch,
    /// One valid touch
    Touch(TouchSample),
    /// Frame too short to carry the fields it claims
    ProtocolError(FrameError),
}

impl TouchResult {
    /// The sample, if this is a touch
    pub fn sample(&self) -> Option<TouchSample> {
        match self {
            TouchResult::Touch(sample) => Some(*sample),
            _ => None,
        }
    }

    /// Returns true if a finger is down
    pub fn is_touch(&self) -> bool {
        matches!(self, TouchResult::Touch(_))
    }
}

/// Validity thresholds applied by [`decode_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchFilter {
    /// Largest touch count accepted as real
    pub max_points: u8,
    /// Raw `(x, y)` pair meaning "idle"
    pub idle_sentinel: u16,
    /// Raw values above this are rejected
    pub noise_limit: u16,
    /// Raw X span mapped onto the logical Y axis
    pub sensor_span: u16,
}

impl Default for TouchFilter {
    fn default() -> Self {
        Self {
            max_points: MAX_TOUCH_POINTS as u8,
            idle_sentinel: IDLE_SENTINEL,
            noise_limit: NOISE_LIMIT,
            sensor_span: SENSOR_SPAN,
        }
    }
}

/// Re-map `value` from one integer range to another
///
/// Integer arithmetic, truncating toward zero, no clamping; an `in_min ==
/// in_max` range maps everything to `out_min`.
pub const fn linear_map(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scaled = (value as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64);
    (scaled + out_min as i64) as i32
}

/// Decode a response frame with the board's default thresholds
pub fn decode(frame: &[u8]) -> TouchResult {
    decode_with(frame, &TouchFilter::default())
}

/// Decode a response frame
///
/// 1. Count of 0 or above `max_points`: no touch.
/// 2. Both axes at the idle sentinel: no touch.
/// 3. Either axis above the noise limit: no touch.
/// 4. Otherwise `y = map(raw_x, 0..span -> span..0)` (floored at 0) and
///    `x = raw_y`.
pub fn decode_with(frame: &[u8], filter: &TouchFilter) -> TouchResult {
    let count = match TouchFrame::count(frame) {
        Ok(count) => count,
        Err(e) => return TouchResult::ProtocolError(e),
    };
    if count == 0 || count > filter.max_points {
        return TouchResult::NoTouch;
    }

    let parsed = match TouchFrame::parse(frame) {
        Ok(parsed) => parsed,
        Err(e) => return TouchResult::ProtocolError(e),
    };

    if parsed.raw_x == filter.idle_sentinel && parsed.raw_y == filter.idle_sentinel {
        return TouchResult::NoTouch;
    }
    if parsed.raw_x > filter.noise_limit || parsed.raw_y > filter.noise_limit {
        return TouchResult::NoTouch;
    }

    let span = i32::from(filter.sensor_span);
    let y = linear_map(i32::from(parsed.raw_x), 0, span, span, 0);

    TouchResult::Touch(TouchSample {
        x: parsed.raw_y,
        // Raw X past the span would go negative; pin it to the top edge.
        y: y.clamp(0, i32::from(u16::MAX)) as u16,
    })
}
