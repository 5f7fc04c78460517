//! Render surface abstraction for the page-buffered e-paper panel.
//!
//! # Draw Protocol
//!
//! A partial refresh works on one selected region at a time. The controller
//! only buffers a band of rows (a *page*) of that region, so a logical frame
//! is produced as:
//!
//! ```ignore
//! surface.select_region(&frame);
//! surface.first_page();
//! loop {
//!     surface.clear_region(&frame);
//!     // ... every primitive of the component ...
//!     if !surface.next_page() {
//!         break;
//!     }
//! }
//! ```
//!
//! Drawing that lands outside the current page is discarded, which is why the
//! full sequence has to be replayed for every page. [`paint_region`] wraps
//! the loop so components cannot get it wrong.
//!
//! One component must finish its whole page loop before another selects a
//! region. The driver calls components sequentially, so no locking is needed.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use log::trace;

use crate::colors::{INK, PAPER};
use crate::geometry::Frame;

// =============================================================================
// Surface Contract
// =============================================================================

/// A display components draw into, one selected region at a time.
pub trait RenderSurface: DrawTarget<Color = BinaryColor> {
    /// Restrict the next draw cycle to `frame`. Pixels outside are dropped.
    fn select_region(
        &mut self,
        frame: &Frame,
    );

    /// Paint `frame` with the background color.
    fn clear_region(
        &mut self,
        frame: &Frame,
    );

    /// Start the page loop for the selected region.
    fn first_page(&mut self);

    /// Commit the current page. Returns `true` while more pages remain.
    fn next_page(&mut self) -> bool;

    /// Font used by [`RenderSurface::draw_text`] and [`RenderSurface::text_bounds`].
    fn set_font(
        &mut self,
        font: &'static MonoFont<'static>,
    );

    /// Pixel size of `text` rendered in the current font. Pure measurement.
    fn text_bounds(
        &self,
        text: &str,
    ) -> Size;

    /// Draw `text` with its baseline starting at `cursor`.
    fn draw_text(
        &mut self,
        text: &str,
        cursor: Point,
    );
}

/// Run the full page loop for `frame`, calling `draw` once per page.
///
/// `draw` must issue the complete drawing sequence every time it is called.
pub fn paint_region<S, F>(
    surface: &mut S,
    frame: &Frame,
    mut draw: F,
) where
    S: RenderSurface,
    F: FnMut(&mut S),
{
    surface.select_region(frame);
    surface.first_page();
    loop {
        draw(surface);
        if !surface.next_page() {
            break;
        }
    }
}

// =============================================================================
// Paged Surface
// =============================================================================

/// [`RenderSurface`] over any binary [`DrawTarget`], emulating a page buffer.
///
/// The selected region is split into horizontal bands of `page_height` rows.
/// While page `k` is active only pixels inside band `k` of the region reach
/// the target. Finishing the last page counts as one refresh pass.
pub struct PagedSurface<D> {
    target: D,
    region: Rectangle,
    page_height: u32,
    page: u32,
    font: &'static MonoFont<'static>,
    passes: u32,
}

impl<D> PagedSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap `target`. A `page_height` of zero is treated as one row.
    pub fn new(
        target: D,
        page_height: u32,
        font: &'static MonoFont<'static>,
    ) -> Self {
        let region = target.bounding_box();
        Self {
            target,
            region,
            page_height: page_height.max(1),
            page: 0,
            font,
            passes: 0,
        }
    }

    /// Number of pages needed to cover the selected region.
    pub fn page_count(&self) -> u32 { self.region.size.height.div_ceil(self.page_height).max(1) }

    /// Completed refresh passes since construction.
    #[inline]
    pub const fn passes(&self) -> u32 { self.passes }

    /// Currently selected region.
    #[inline]
    pub const fn region(&self) -> Rectangle { self.region }

    /// Underlying draw target.
    #[inline]
    pub const fn target(&self) -> &D { &self.target }

    /// Consume the surface, returning the underlying draw target.
    pub fn into_inner(self) -> D { self.target }

    /// Area pixels may currently land in: the active page band of the region.
    fn page_band(&self) -> Rectangle {
        let top = self.page * self.page_height;
        let rows = self.page_height.min(self.region.size.height.saturating_sub(top));
        Rectangle::new(
            self.region.top_left + Point::new(0, top as i32),
            Size::new(self.region.size.width, rows),
        )
    }
}

impl<D> Dimensions for PagedSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn bounding_box(&self) -> Rectangle { self.target.bounding_box() }
}

impl<D> DrawTarget for PagedSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let band = self.page_band();
        self.target
            .draw_iter(pixels.into_iter().filter(|Pixel(point, _)| band.contains(*point)))
    }
}

impl<D> RenderSurface for PagedSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn select_region(
        &mut self,
        frame: &Frame,
    ) {
        self.region = frame.to_rectangle().intersection(&self.target.bounding_box());
        self.page = 0;
    }

    fn clear_region(
        &mut self,
        frame: &Frame,
    ) {
        self.fill_solid(&frame.to_rectangle(), PAPER).ok();
    }

    fn first_page(&mut self) { self.page = 0; }

    fn next_page(&mut self) -> bool {
        self.page += 1;
        if self.page < self.page_count() {
            return true;
        }
        self.passes = self.passes.wrapping_add(1);
        trace!(
            "refresh pass {} done: region {}x{} at ({}, {}), {} page(s)",
            self.passes,
            self.region.size.width,
            self.region.size.height,
            self.region.top_left.x,
            self.region.top_left.y,
            self.page
        );
        self.page = 0;
        false
    }

    fn set_font(
        &mut self,
        font: &'static MonoFont<'static>,
    ) {
        self.font = font;
    }

    fn text_bounds(
        &self,
        text: &str,
    ) -> Size {
        MonoTextStyle::new(self.font, INK)
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
    }

    fn draw_text(
        &mut self,
        text: &str,
        cursor: Point,
    ) {
        let style = MonoTextStyle::new(self.font, INK);
        Text::with_baseline(text, cursor, style, Baseline::Alphabetic).draw(self).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
