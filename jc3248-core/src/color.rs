//! Panel color helpers
//!
//! The AXS15231B takes 16-bit RGB565 pixels. Callers usually think in
//! 8-bit RGB, so [`rgb`] does the packing.

use embedded_graphics_core::pixelcolor::RgbColor;

pub use embedded_graphics_core::pixelcolor::Rgb565;

/// Pack 8-bit channels into an RGB565 color
///
/// Truncates the low bits the same way the panel vendor's `color565` does.
pub fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Pack a `[r, g, b]` triple (as stored in configuration)
pub fn rgb_triple(c: [u8; 3]) -> Rgb565 {
    rgb(c[0], c[1], c[2])
}

/// Black, for clearing regions
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// White, for text and QR backgrounds
pub const WHITE: Rgb565 = Rgb565::WHITE;
