//! Status tiles painted into an image's destination region
//!
//! Every pipeline outcome other than a finished image leaves one of these
//! behind, so the region never shows stale pixels.

use core::fmt::Write;

use heapless::String;
use jc3248_core::color::{BLACK, WHITE};
use jc3248_core::state::{FailKind, ImageFetchState};
use jc3248_core::{rgb, LogicalRect, Rgb565};

use crate::backend::{DisplayError, FrameBufferSink};
use crate::canvas::LandscapeCanvas;

/// A tile shown instead of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placeholder {
    /// Fetch in progress
    Loading,
    /// Not connected / connect refused
    Network,
    /// Non-success HTTP status
    Http(u16),
    /// Server declared no body
    EmptyBody,
    /// Body cut short
    Incomplete { timed_out: bool },
    /// Staging store failed
    Storage,
    /// Buffer allocation failed
    OutOfMemory,
    /// Decoder rejected the data
    Decode,
    /// Caller cancelled
    Cancelled,
}

struct Tile {
    width: i32,
    height: i32,
    radius: u16,
    background: Rgb565,
    text: Rgb565,
}

impl Placeholder {
    /// The tile for a terminal pipeline failure
    ///
    /// `None` when the sink itself failed and nothing can be painted.
    pub fn for_failure(kind: FailKind) -> Option<Self> {
        let placeholder = match kind {
            FailKind::Network => Placeholder::Network,
            FailKind::Http(status) => Placeholder::Http(status),
            FailKind::EmptyBody => Placeholder::EmptyBody,
            FailKind::IncompleteTransfer { timed_out } => Placeholder::Incomplete { timed_out },
            FailKind::Staging => Placeholder::Storage,
            FailKind::OutOfMemory => Placeholder::OutOfMemory,
            FailKind::Decode(_) => Placeholder::Decode,
            FailKind::Cancelled => Placeholder::Cancelled,
            FailKind::Display => return None,
        };
        Some(placeholder)
    }

    fn tile(&self) -> Tile {
        let (width, height, radius, background, text) = match self {
            Placeholder::Loading => (100, 80, 5, rgb(30, 30, 30), rgb(200, 200, 200)),
            Placeholder::Decode => (100, 80, 0, rgb(70, 70, 100), WHITE),
            Placeholder::Incomplete { .. } => (100, 20, 0, rgb(120, 90, 30), WHITE),
            Placeholder::OutOfMemory | Placeholder::Storage => {
                (80, 20, 0, rgb(200, 100, 50), WHITE)
            }
            Placeholder::Cancelled => (80, 20, 0, rgb(60, 60, 60), WHITE),
            Placeholder::Network | Placeholder::Http(_) | Placeholder::EmptyBody => {
                (80, 20, 0, rgb(200, 50, 50), WHITE)
            }
        };
        Tile {
            width,
            height,
            radius,
            background,
            text,
        }
    }

    /// Paint into `dest`
    ///
    /// The whole region is cleared first; the tile sits at its top-left
    /// corner, cropped to the region. A cropped tile carries no text.
    pub fn paint<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
        dest: LogicalRect,
    ) -> Result<(), DisplayError> {
        if dest.is_empty() {
            return Ok(());
        }
        let tile = self.tile();
        let area = LogicalRect::at(
            dest.origin(),
            tile.width.min(dest.width),
            tile.height.min(dest.height),
        );

        canvas.fill_rect(dest, BLACK)?;
        if tile.radius > 0 {
            canvas.fill_round_rect(area, tile.radius, tile.background)?;
        } else {
            canvas.fill_rect(area, tile.background)?;
        }

        // Text only goes on an uncropped tile
        if area.width < tile.width || area.height < tile.height {
            return Ok(());
        }

        let origin = dest.origin();
        match self {
            Placeholder::Loading => {
                canvas.print("Loading...", origin.offset(10, 35), 1, tile.text)?;
            }
            Placeholder::Decode => {
                canvas.print("JPG Format", origin.offset(10, 25), 1, tile.text)?;
                canvas.print("Not Supported", origin.offset(5, 45), 1, tile.text)?;
            }
            Placeholder::Http(status) => {
                let mut label: String<12> = String::new();
                // "HTTP 65535" is 10 bytes
                let _ = write!(label, "HTTP {}", status);
                canvas.print(&label, origin.offset(5, 5), 1, tile.text)?;
            }
            _ => {
                canvas.print(self.label(), origin.offset(5, 5), 1, tile.text)?;
            }
        }
        Ok(())
    }

    /// Short text for single-line tiles
    pub fn label(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading...",
            Placeholder::Network => "No network",
            Placeholder::Http(_) => "HTTP",
            Placeholder::EmptyBody => "Empty body",
            Placeholder::Incomplete { timed_out: true } => "Timed out",
            Placeholder::Incomplete { timed_out: false } => "Incomplete",
            Placeholder::Storage => "Storage err",
            Placeholder::OutOfMemory => "Memory err",
            Placeholder::Decode => "JPG Format",
            Placeholder::Cancelled => "Cancelled",
        }
    }
}

/// Download progress bar anchored at a region's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    frame: LogicalRect,
}

impl ProgressBar {
    pub const WIDTH: i32 = 100;
    pub const HEIGHT: i32 = 20;

    /// Bar inside `dest`, cropped if the region is smaller than the bar
    pub fn within(dest: LogicalRect) -> Self {
        Self {
            frame: LogicalRect::at(
                dest.origin(),
                Self::WIDTH.min(dest.width),
                Self::HEIGHT.min(dest.height),
            ),
        }
    }

    /// Outer frame
    pub fn frame(&self) -> LogicalRect {
        self.frame
    }

    /// Fill length in pixels at full progress
    pub fn track(&self) -> u32 {
        (self.frame.width - 2).max(0) as u32
    }

    fn color() -> Rgb565 {
        rgb(50, 50, 200)
    }

    /// Draw the empty outline
    pub fn begin<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
    ) -> Result<(), DisplayError> {
        canvas.draw_rect(self.frame, Self::color())
    }

    /// Fill proportional to `state`; returns the fill length drawn
    pub fn update<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
        state: &ImageFetchState,
    ) -> Result<u32, DisplayError> {
        let fill = state.progress(self.track());
        let inner = LogicalRect::at(
            self.frame.origin().offset(1, 1),
            fill as i32,
            self.frame.height - 2,
        );
        canvas.fill_rect(inner, Self::color())?;
        Ok(fill)
    }

    /// Erase the bar
    pub fn clear<S: FrameBufferSink>(
        &self,
        canvas: &mut LandscapeCanvas<S>,
    ) -> Result<(), DisplayError> {
        canvas.fill_rect(self.frame, BLACK)
    }
}
