//! The fixed 90° logical-to-panel transform
//!
//! ```text
//!   logical (480x320)              panel (320x480)
//!   (0,0) ──────► x                (0,0) ──────► px
//!     │                              │
//!     ▼ y                            ▼ py
//!
//!   px = W - ly        py = lx
//! ```
//!
//! Rectangles are mapped from their far corner so that the physical rect
//! keeps a top-left origin, which swaps width and height.

use super::{LogicalPoint, LogicalRect, PhysicalPoint, PhysicalRect, PANEL_HEIGHT, PANEL_WIDTH};

/// Stateless converter between logical and panel space
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Map a logical point onto the panel
    ///
    /// The result is not clamped; callers check
    /// [`PhysicalPoint::is_on_panel`] before writing.
    pub const fn map_point(point: LogicalPoint) -> PhysicalPoint {
        PhysicalPoint {
            x: PANEL_WIDTH.saturating_sub(point.y),
            y: point.x,
        }
    }

    /// Map a logical rectangle onto the panel, clamped to its bounds
    ///
    /// Zero-area results are valid and mean the rectangle was fully clipped.
    pub fn map_rect(rect: LogicalRect) -> PhysicalRect {
        let w = i64::from(PANEL_WIDTH);
        let h = i64::from(PANEL_HEIGHT);
        let (lx, ly) = (i64::from(rect.x), i64::from(rect.y));
        let (lw, lh) = (i64::from(rect.width), i64::from(rect.height));

        let mut px = w - (ly + lh);
        let mut py = lx;
        let mut pw = lh.max(0);
        let mut ph = lw.max(0);

        if px < 0 {
            px = 0;
        }
        if py < 0 {
            py = 0;
        }
        // An origin past the far edge collapses to an empty rect on the edge.
        px = px.min(w);
        py = py.min(h);
        if px + pw > w {
            pw = w - px;
        }
        if py + ph > h {
            ph = h - py;
        }

        // All four values are within 0..=480 here.
        PhysicalRect {
            x: px as i32,
            y: py as i32,
            width: pw as i32,
            height: ph as i32,
        }
    }

    /// Map ellipse radii; the rotation exchanges the principal axes
    pub const fn map_radii(rx: i32, ry: i32) -> (i32, i32) {
        (ry, rx)
    }

    /// Map a panel point back to logical space
    pub const fn unmap_point(point: PhysicalPoint) -> LogicalPoint {
        LogicalPoint {
            x: point.y,
            y: PANEL_WIDTH.saturating_sub(point.x),
        }
    }

    /// Map a panel rectangle back to logical space
    ///
    /// Inverse of [`map_rect`](Self::map_rect) whenever no clamping occurred.
    pub const fn unmap_rect(rect: PhysicalRect) -> LogicalRect {
        LogicalRect {
            x: rect.y,
            y: PANEL_WIDTH.saturating_sub(rect.x.saturating_add(rect.width)),
            width: rect.height,
            height: rect.width,
        }
    }
}
