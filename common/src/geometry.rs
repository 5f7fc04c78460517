//! Screen geometry: frames describing the region each component owns.
//!
//! Points are `embedded_graphics` [`Point`]s, which already provide
//! component-wise `+`, `-` and [`Point::component_mul`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A rectangular screen region: origin plus signed width and height.
///
/// Width and height are signed so layout math can express directional
/// padding. A frame with a non-positive extent covers no pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Upper-left corner in screen coordinates.
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub const fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// X coordinate one past the rightmost column.
    #[inline]
    pub const fn right(&self) -> i32 { self.origin.x + self.width }

    /// Y coordinate one past the bottom row.
    #[inline]
    pub const fn bottom(&self) -> i32 { self.origin.y + self.height }

    /// Convert to an `embedded_graphics` rectangle, clamping negative extents to zero.
    pub const fn to_rectangle(&self) -> Rectangle {
        let w = if self.width > 0 { self.width as u32 } else { 0 };
        let h = if self.height > 0 { self.height as u32 } else { 0 };
        Rectangle::new(self.origin, Size::new(w, h))
    }
}

impl From<Frame> for Rectangle {
    fn from(frame: Frame) -> Self { frame.to_rectangle() }
}
