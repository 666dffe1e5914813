//! Logical and physical geometry
//!
//! Applications work in a 480x320 landscape space with the origin at the
//! top-left. The panel underneath is a 320x480 portrait framebuffer mounted
//! a quarter turn away. [`CoordinateMapper`] is the only place the two
//! spaces meet.

pub mod mapper;

pub use mapper::CoordinateMapper;

/// Native panel width in pixels (portrait)
pub const PANEL_WIDTH: i32 = 320;

/// Native panel height in pixels (portrait)
pub const PANEL_HEIGHT: i32 = 480;

/// Logical (landscape) width seen by applications
pub const LOGICAL_WIDTH: i32 = PANEL_HEIGHT;

/// Logical (landscape) height seen by applications
pub const LOGICAL_HEIGHT: i32 = PANEL_WIDTH;

/// Point in caller-facing landscape coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogicalPoint {
    pub x: i32,
    pub y: i32,
}

impl LogicalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Rectangle in caller-facing landscape coordinates
///
/// Width and height may be negative or overflow the screen; mapping clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogicalRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LogicalRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size at `origin`
    pub const fn at(origin: LogicalPoint, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// The whole landscape screen
    pub const fn screen() -> Self {
        Self::new(0, 0, LOGICAL_WIDTH, LOGICAL_HEIGHT)
    }

    /// Top-left corner
    pub const fn origin(&self) -> LogicalPoint {
        LogicalPoint::new(self.x, self.y)
    }

    /// Check if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if `point` lies inside this rectangle
    pub fn contains(&self, point: LogicalPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && i64::from(point.x) < i64::from(self.x) + i64::from(self.width)
            && i64::from(point.y) < i64::from(self.y) + i64::from(self.height)
    }
}

/// Point in native panel coordinates
///
/// Not clamped: a mapped point may land off the panel and must be checked
/// with [`PhysicalPoint::is_on_panel`] before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalPoint {
    pub x: i32,
    pub y: i32,
}

impl PhysicalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if the point lies within `[0, W) x [0, H)`
    pub const fn is_on_panel(&self) -> bool {
        self.x >= 0 && self.x < PANEL_WIDTH && self.y >= 0 && self.y < PANEL_HEIGHT
    }
}

/// Rectangle in native panel coordinates
///
/// Produced by [`CoordinateMapper::map_rect`], which guarantees
/// `0 <= x`, `0 <= y`, `x + width <= W`, `y + height <= H` and non-negative
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PhysicalRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the rectangle was clipped down to nothing
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Pixel count
    pub const fn area(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.width as u32 * self.height as u32
        }
    }

    /// Check if the rectangle lies entirely on the panel
    pub const fn is_within_panel(&self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.x as i64 + self.width as i64 <= PANEL_WIDTH as i64
            && self.y as i64 + self.height as i64 <= PANEL_HEIGHT as i64
    }
}
