//! Color constants for the monochrome e-paper panel.
//!
//! The panel is bistable black-on-white, so everything is expressed as
//! [`BinaryColor`]. `On` drives a pixel to ink, `Off` leaves it as paper.

use embedded_graphics::pixelcolor::BinaryColor;

/// Ink (black) pixels. Used for text and chart bars.
pub const INK: BinaryColor = BinaryColor::On;

/// Paper (white) pixels. Background used when a region is cleared.
pub const PAPER: BinaryColor = BinaryColor::Off;
