//! 1-bit in-memory draw target for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// `W` x `H` monochrome canvas. Out-of-bounds pixels are ignored.
pub struct Canvas<const W: usize, const H: usize> {
    pixels: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub const fn new() -> Self { Self { pixels: [[false; W]; H] } }

    pub fn is_ink(
        &self,
        x: usize,
        y: usize,
    ) -> bool {
        self.pixels[y][x]
    }

    pub fn ink_count(&self) -> usize { self.pixels.iter().flatten().filter(|p| **p).count() }

    /// Inked pixels in column `x`.
    pub fn column_ink(
        &self,
        x: usize,
    ) -> usize {
        self.pixels.iter().filter(|row| row[x]).count()
    }

    /// Bounding box of all inked pixels as `(min_x, min_y, max_x, max_y)`.
    pub fn ink_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, _) in row.iter().enumerate().filter(|(_, p)| **p) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Canvas<W, H> {
    fn size(&self) -> Size { Size::new(W as u32, H as u32) }
}

impl<const W: usize, const H: usize> DrawTarget for Canvas<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as usize) < W && (point.y as usize) < H {
                self.pixels[point.y as usize][point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}
