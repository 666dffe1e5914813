//! Recording sink for unit tests

use alloc::vec::Vec;

use jc3248_core::{PhysicalPoint, PhysicalRect, Rgb565};

use crate::backend::{DisplayError, FrameBufferSink, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    FillRect(PhysicalRect, Rgb565),
    DrawRect(PhysicalRect, Rgb565),
    FillRoundRect(PhysicalRect, u32, Rgb565),
    Pixel(PhysicalPoint, Rgb565),
    Line(PhysicalPoint, PhysicalPoint),
    Triangle(PhysicalPoint, PhysicalPoint, PhysicalPoint, bool),
    Circle(PhysicalPoint, u32, bool),
    Ellipse(PhysicalPoint, u32, u32, bool),
    Rotation(Rotation),
    Flush,
}

#[derive(Default)]
pub struct RecordingSink {
    pub ops: Vec<Op>,
    pub rotation: Rotation,
}

impl RecordingSink {
    pub fn landscape() -> Self {
        Self {
            ops: Vec::new(),
            rotation: Rotation::Landscape,
        }
    }

    pub fn fills(&self) -> Vec<(PhysicalRect, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn pixels(&self) -> Vec<(PhysicalPoint, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Pixel(p, c) => Some((*p, *c)),
                _ => None,
            })
            .collect()
    }
}

impl FrameBufferSink for RecordingSink {
    fn fill_rect(&mut self, rect: PhysicalRect, color: Rgb565) -> Result<(), DisplayError> {
        self.ops.push(Op::FillRect(rect, color));
        Ok(())
    }

    fn draw_rect(&mut self, rect: PhysicalRect, color: Rgb565) -> Result<(), DisplayError> {
        self.ops.push(Op::DrawRect(rect, color));
        Ok(())
    }

    fn fill_round_rect(
        &mut self,
        rect: PhysicalRect,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::FillRoundRect(rect, radius, color));
        Ok(())
    }

    fn draw_pixel(&mut self, point: PhysicalPoint, color: Rgb565) -> Result<(), DisplayError> {
        self.ops.push(Op::Pixel(point, color));
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: PhysicalPoint,
        to: PhysicalPoint,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Line(from, to));
        Ok(())
    }

    fn draw_triangle(
        &mut self,
        a: PhysicalPoint,
        b: PhysicalPoint,
        c: PhysicalPoint,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Triangle(a, b, c, false));
        Ok(())
    }

    fn fill_triangle(
        &mut self,
        a: PhysicalPoint,
        b: PhysicalPoint,
        c: PhysicalPoint,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Triangle(a, b, c, true));
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: PhysicalPoint,
        radius: u32,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Circle(center, radius, false));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: PhysicalPoint,
        radius: u32,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Circle(center, radius, true));
        Ok(())
    }

    fn draw_ellipse(
        &mut self,
        center: PhysicalPoint,
        rx: u32,
        ry: u32,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Ellipse(center, rx, ry, false));
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        center: PhysicalPoint,
        rx: u32,
        ry: u32,
        _color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Ellipse(center, rx, ry, true));
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), DisplayError> {
        self.rotation = rotation;
        self.ops.push(Op::Rotation(rotation));
        Ok(())
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}
