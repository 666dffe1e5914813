//! Framebuffer sink trait
//!
//! The panel driver (QSPI bus, controller init, primitive rasterizers) is
//! outside this workspace. Everything here draws through [`FrameBufferSink`],
//! which speaks native portrait coordinates only.

use jc3248_core::{Error, PhysicalPoint, PhysicalRect, Rgb565, PANEL_HEIGHT, PANEL_WIDTH};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
    /// Pixel buffer shorter than the area it should cover
    ShortBuffer,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        match e {
            DisplayError::ShortBuffer | DisplayError::InvalidCoordinates => Error::Protocol,
            DisplayError::Communication | DisplayError::NotInitialized => Error::Communication,
        }
    }
}

/// Panel scan orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Native 320x480
    #[default]
    Portrait,
    /// 90° clockwise
    Landscape,
    /// 180°
    PortraitFlipped,
    /// 270°
    LandscapeFlipped,
}

impl Rotation {
    /// Rotation index as used by panel drivers (0..=3)
    pub const fn index(self) -> u8 {
        match self {
            Rotation::Portrait => 0,
            Rotation::Landscape => 1,
            Rotation::PortraitFlipped => 2,
            Rotation::LandscapeFlipped => 3,
        }
    }

    /// Parse a driver rotation index (taken modulo 4)
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::Portrait,
            1 => Rotation::Landscape,
            2 => Rotation::PortraitFlipped,
            _ => Rotation::LandscapeFlipped,
        }
    }
}

/// Pixel-write capability of the panel driver
///
/// All coordinates are native panel space. Implementations clip primitives
/// that cross the panel edge; rects handed in by the canvas are already
/// clamped.
pub trait FrameBufferSink {
    /// Fill a rectangle
    fn fill_rect(&mut self, rect: PhysicalRect, color: Rgb565) -> Result<(), DisplayError>;

    /// Write a single pixel
    fn draw_pixel(&mut self, point: PhysicalPoint, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw a one-pixel line
    fn draw_line(
        &mut self,
        from: PhysicalPoint,
        to: PhysicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw a triangle outline
    fn draw_triangle(
        &mut self,
        a: PhysicalPoint,
        b: PhysicalPoint,
        c: PhysicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Fill a triangle
    fn fill_triangle(
        &mut self,
        a: PhysicalPoint,
        b: PhysicalPoint,
        c: PhysicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw a circle outline
    fn draw_circle(
        &mut self,
        center: PhysicalPoint,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Fill a circle
    fn fill_circle(
        &mut self,
        center: PhysicalPoint,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw an axis-aligned ellipse outline
    fn draw_ellipse(
        &mut self,
        center: PhysicalPoint,
        rx: u32,
        ry: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Fill an axis-aligned ellipse
    fn fill_ellipse(
        &mut self,
        center: PhysicalPoint,
        rx: u32,
        ry: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Set the controller scan orientation
    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), DisplayError>;

    /// Current controller scan orientation
    fn rotation(&self) -> Rotation;

    /// Push buffered content to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Draw a rectangle outline
    fn draw_rect(&mut self, rect: PhysicalRect, color: Rgb565) -> Result<(), DisplayError> {
        if rect.is_empty() {
            return Ok(());
        }
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;
        self.fill_rect(PhysicalRect::new(rect.x, rect.y, rect.width, 1), color)?;
        self.fill_rect(PhysicalRect::new(rect.x, bottom, rect.width, 1), color)?;
        self.fill_rect(PhysicalRect::new(rect.x, rect.y, 1, rect.height), color)?;
        self.fill_rect(PhysicalRect::new(right, rect.y, 1, rect.height), color)
    }

    /// Fill a rounded rectangle
    ///
    /// Sinks without a rounded primitive may keep square corners.
    fn fill_round_rect(
        &mut self,
        rect: PhysicalRect,
        _radius: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.fill_rect(rect, color)
    }

    /// Draw a rounded rectangle outline
    fn draw_round_rect(
        &mut self,
        rect: PhysicalRect,
        _radius: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.draw_rect(rect, color)
    }

    /// Fill the whole panel
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rect(PhysicalRect::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_index() {
        for i in 0..4 {
            assert_eq!(Rotation::from_index(i).index(), i);
        }
        assert_eq!(Rotation::from_index(5), Rotation::Landscape);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(Error::from(DisplayError::Communication), Error::Communication);
        assert_eq!(Error::from(DisplayError::ShortBuffer), Error::Protocol);
    }
}
