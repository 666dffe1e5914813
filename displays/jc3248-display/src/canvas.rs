//! Landscape drawing surface
//!
//! [`LandscapeCanvas`] takes logical (480x320) coordinates and routes every
//! primitive through [`CoordinateMapper`] before it reaches the sink:
//! points via `map_point`, rects via `map_rect`, radii via `map_radii`.
//! The sink stays in its native portrait rotation.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

use jc3248_core::{
    CoordinateMapper, LogicalPoint, LogicalRect, Rgb565, LOGICAL_HEIGHT, LOGICAL_WIDTH,
};

use crate::backend::{DisplayError, FrameBufferSink, Rotation};

/// Font for a text size multiplier
///
/// Size 1 is the small UI font; anything larger uses the big one.
pub fn font_for(size: u8) -> &'static MonoFont<'static> {
    if size <= 1 {
        &FONT_6X10
    } else {
        &FONT_10X20
    }
}

/// Drawing surface in landscape coordinates
pub struct LandscapeCanvas<S: FrameBufferSink> {
    sink: S,
}

impl<S: FrameBufferSink> LandscapeCanvas<S> {
    /// Wrap a sink, putting it back in native rotation if needed
    pub fn new(mut sink: S) -> Result<Self, DisplayError> {
        if sink.rotation() != Rotation::Portrait {
            sink.set_rotation(Rotation::Portrait)?;
        }
        Ok(Self { sink })
    }

    /// The underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The underlying sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sink
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Fill the whole panel
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.sink.fill_screen(color)
    }

    /// Fill a rectangle
    ///
    /// Rects clipped to nothing are skipped without touching the sink.
    pub fn fill_rect(&mut self, rect: LogicalRect, color: Rgb565) -> Result<(), DisplayError> {
        let mapped = CoordinateMapper::map_rect(rect);
        if mapped.is_empty() {
            return Ok(());
        }
        self.sink.fill_rect(mapped, color)
    }

    /// Draw a rectangle outline
    pub fn draw_rect(&mut self, rect: LogicalRect, color: Rgb565) -> Result<(), DisplayError> {
        let mapped = CoordinateMapper::map_rect(rect);
        if mapped.is_empty() {
            return Ok(());
        }
        self.sink.draw_rect(mapped, color)
    }

    /// Fill a rounded rectangle
    pub fn fill_round_rect(
        &mut self,
        rect: LogicalRect,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let mapped = CoordinateMapper::map_rect(rect);
        if mapped.is_empty() {
            return Ok(());
        }
        self.sink.fill_round_rect(mapped, u32::from(radius), color)
    }

    /// Draw a rounded rectangle outline
    pub fn draw_round_rect(
        &mut self,
        rect: LogicalRect,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let mapped = CoordinateMapper::map_rect(rect);
        if mapped.is_empty() {
            return Ok(());
        }
        self.sink.draw_round_rect(mapped, u32::from(radius), color)
    }

    /// Write one pixel; off-panel points are dropped
    pub fn draw_pixel(&mut self, point: LogicalPoint, color: Rgb565) -> Result<(), DisplayError> {
        let mapped = CoordinateMapper::map_point(point);
        if !mapped.is_on_panel() {
            return Ok(());
        }
        self.sink.draw_pixel(mapped, color)
    }

    pub fn draw_line(
        &mut self,
        from: LogicalPoint,
        to: LogicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.sink.draw_line(
            CoordinateMapper::map_point(from),
            CoordinateMapper::map_point(to),
            color,
        )
    }

    pub fn draw_triangle(
        &mut self,
        a: LogicalPoint,
        b: LogicalPoint,
        c: LogicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.sink.draw_triangle(
            CoordinateMapper::map_point(a),
            CoordinateMapper::map_point(b),
            CoordinateMapper::map_point(c),
            color,
        )
    }

    pub fn fill_triangle(
        &mut self,
        a: LogicalPoint,
        b: LogicalPoint,
        c: LogicalPoint,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.sink.fill_triangle(
            CoordinateMapper::map_point(a),
            CoordinateMapper::map_point(b),
            CoordinateMapper::map_point(c),
            color,
        )
    }

    pub fn draw_circle(
        &mut self,
        center: LogicalPoint,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.sink
            .draw_circle(CoordinateMapper::map_point(center), u32::from(radius), color)
    }

    pub fn fill_circle(
        &mut self,
        center: LogicalPoint,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.sink
            .fill_circle(CoordinateMapper::map_point(center), u32::from(radius), color)
    }

    /// Draw an ellipse outline with logical radii `rx` (horizontal) and `ry`
    pub fn draw_ellipse(
        &mut self,
        center: LogicalPoint,
        rx: u16,
        ry: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let (prx, pry) = Self::radii(rx, ry);
        self.sink
            .draw_ellipse(CoordinateMapper::map_point(center), prx, pry, color)
    }

    /// Fill an ellipse with logical radii `rx` (horizontal) and `ry`
    pub fn fill_ellipse(
        &mut self,
        center: LogicalPoint,
        rx: u16,
        ry: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let (prx, pry) = Self::radii(rx, ry);
        self.sink
            .fill_ellipse(CoordinateMapper::map_point(center), prx, pry, color)
    }

    fn radii(rx: u16, ry: u16) -> (u32, u32) {
        let (prx, pry) = CoordinateMapper::map_radii(i32::from(rx), i32::from(ry));
        (prx.unsigned_abs(), pry.unsigned_abs())
    }

    /// Print text with its top-left corner at `at`
    ///
    /// Returns the position where following text would continue.
    pub fn print(
        &mut self,
        text: &str,
        at: LogicalPoint,
        size: u8,
        color: Rgb565,
    ) -> Result<LogicalPoint, DisplayError> {
        let style = MonoTextStyle::new(font_for(size), color);
        let next = Text::with_baseline(text, Point::new(at.x, at.y), style, Baseline::Top)
            .draw(&mut self.draw_target())?;
        Ok(LogicalPoint::new(next.x, next.y))
    }

    /// Draw a row-major bitmap into `rect`
    ///
    /// Pixels mapping off the panel are dropped.
    pub fn draw_bitmap(&mut self, pixels: &[Rgb565], rect: LogicalRect) -> Result<(), DisplayError> {
        if rect.is_empty() {
            return Ok(());
        }
        let (w, h) = (rect.width as usize, rect.height as usize);
        if pixels.len() < w.saturating_mul(h) {
            return Err(DisplayError::ShortBuffer);
        }
        for (row, line) in pixels.chunks_exact(w).take(h).enumerate() {
            for (col, color) in line.iter().enumerate() {
                let point = rect.origin().offset(col as i32, row as i32);
                self.draw_pixel(point, *color)?;
            }
        }
        Ok(())
    }

    /// Push buffered content to the panel
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        self.sink.flush()
    }

    /// An `embedded-graphics` target in landscape coordinates
    pub fn draw_target(&mut self) -> LandscapeTarget<'_, S> {
        LandscapeTarget { sink: &mut self.sink }
    }
}

/// `DrawTarget` adapter that maps every pixel onto the panel
pub struct LandscapeTarget<'a, S: FrameBufferSink> {
    sink: &'a mut S,
}

impl<S: FrameBufferSink> OriginDimensions for LandscapeTarget<'_, S> {
    fn size(&self) -> Size {
        Size::new(LOGICAL_WIDTH as u32, LOGICAL_HEIGHT as u32)
    }
}

impl<S: FrameBufferSink> DrawTarget for LandscapeTarget<'_, S> {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let mapped = CoordinateMapper::map_point(LogicalPoint::new(point.x, point.y));
            if mapped.is_on_panel() {
                self.sink.draw_pixel(mapped, color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let rect = LogicalRect::new(
            area.top_left.x,
            area.top_left.y,
            i32::try_from(area.size.width).unwrap_or(i32::MAX),
            i32::try_from(area.size.height).unwrap_or(i32::MAX),
        );
        let mapped = CoordinateMapper::map_rect(rect);
        if mapped.is_empty() {
            return Ok(());
        }
        self.sink.fill_rect(mapped, color)
    }
}
