//! Text table component.
//!
//! A fixed `ROWS` x `COLS` grid laid over one frame. Each cell shows one
//! telemetry field, chosen by a static binding list from the integrator, and
//! is centered inside its slot when painted.
//!
//! # Cell Anchors
//!
//! Text is drawn upward from its baseline cursor, so each cell is anchored at
//! the *bottom* of its row slot:
//!
//! ```text
//! anchor(row, col) = (col * col_width, (row + 1) * row_height)
//! ```
//!
//! relative to the table frame's origin.
//!
//! # Centering
//!
//! For text of size `tw` x `th`:
//! - `bx = col_width - tw`, halved only when non-negative. Text wider than
//!   its column keeps the full negative difference and overflows to the left.
//! - `by = row_height - th`, same rule, then negated because the anchor is
//!   the bottom edge.
//!
//! Empty cells get a zero offset and draw nothing.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use heapless::String;
use log::debug;

use crate::component::Component;
use crate::config::CELL_TEXT_LEN;
use crate::format::{clock_label, compass_point, knots, strip_vowels};
use crate::geometry::Frame;
use crate::surface::{RenderSurface, paint_region};
use crate::telemetry::{Telemetry, truncated};

// =============================================================================
// Field Bindings
// =============================================================================

/// Telemetry field shown in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Local wall-clock time of the sample, prefixed with `@`.
    Clock,
    /// City name with inner vowels removed.
    City,
    /// Weather condition text.
    Condition,
    /// Temperature in whole degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Wind speed in whole knots.
    WindKnots,
    /// Pressure in hPa.
    Pressure,
    /// Wind direction as a compass point.
    WindDirection,
    /// Number of updates the table has seen. Not derived from telemetry.
    Heartbeat,
}

impl Field {
    /// Render this field for `telemetry`. `cycle` feeds [`Field::Heartbeat`].
    pub fn render(
        self,
        telemetry: &Telemetry,
        cycle: u32,
    ) -> String<CELL_TEXT_LEN> {
        // "-2147483648hPa" is the longest numeric cell
        const { assert!(CELL_TEXT_LEN >= 14, "cell text capacity too small for numeric fields") };

        let mut out: String<CELL_TEXT_LEN> = String::new();
        let written = match self {
            Self::Clock => write!(out, "@{}", clock_label(telemetry.timestamp)),
            Self::City => return strip_vowels(&telemetry.city),
            Self::Condition => return truncated(&telemetry.condition),
            Self::Temperature => write!(out, "{}C", telemetry.temperature_c as i32),
            Self::Humidity => write!(out, "{}%", telemetry.humidity_pct),
            Self::WindKnots => write!(out, "{}kn", knots(telemetry.wind_speed_ms)),
            Self::Pressure => write!(out, "{}hPa", telemetry.pressure_hpa),
            Self::WindDirection => out.push_str(compass_point(telemetry.wind_deg)).map_err(|_| core::fmt::Error),
            Self::Heartbeat => write!(out, "{cycle}"),
        };
        // cannot fail, capacity asserted above
        written.ok();
        out
    }
}

/// Places one [`Field`] into the cell at `row`, `col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBinding {
    pub row: usize,
    pub col: usize,
    pub field: Field,
}

impl CellBinding {
    pub const fn new(
        row: usize,
        col: usize,
        field: Field,
    ) -> Self {
        Self { row, col, field }
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One grid slot: a fixed anchor and the text currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    anchor: Point,
    text: String<CELL_TEXT_LEN>,
}

impl Cell {
    const fn at(anchor: Point) -> Self {
        Self {
            anchor,
            text: String::new(),
        }
    }

    /// Bottom-left of the cell's slot, relative to the table frame.
    #[inline]
    pub const fn anchor(&self) -> Point { self.anchor }

    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }
}

/// Offset that centers text of `bounds` inside a `col_width` x `row_height` slot.
///
/// See the module docs for the overflow rule.
pub const fn centering_offset(
    bounds: Size,
    col_width: i32,
    row_height: i32,
) -> Point {
    let bx = col_width - bounds.width as i32;
    let bx = if bx < 0 { bx } else { bx / 2 };
    let by = row_height - bounds.height as i32;
    let by = if by < 0 { by } else { by / 2 };
    Point::new(bx, -by)
}

// =============================================================================
// Table
// =============================================================================

/// Grid of text cells over one frame.
pub struct Table<const ROWS: usize, const COLS: usize> {
    frame: Frame,
    row_height: i32,
    col_width: i32,
    cells: [[Cell; COLS]; ROWS],
    bindings: &'static [CellBinding],
    font: &'static MonoFont<'static>,
    /// Heartbeat counter. Component-owned state, bumped on every update
    /// regardless of what the telemetry contains.
    cycle: u32,
}

impl<const ROWS: usize, const COLS: usize> Table<ROWS, COLS> {
    /// Build the grid over `frame`.
    ///
    /// # Panics
    ///
    /// Panics if a binding points outside the grid.
    pub fn new(
        frame: Frame,
        bindings: &'static [CellBinding],
        font: &'static MonoFont<'static>,
    ) -> Self {
        const { assert!(ROWS > 0 && COLS > 0, "table needs at least one cell") };
        for b in bindings {
            assert!(b.row < ROWS && b.col < COLS, "binding ({}, {}) outside {ROWS}x{COLS} table", b.row, b.col);
        }

        let row_height = frame.height / ROWS as i32;
        let col_width = frame.width / COLS as i32;
        let cells = core::array::from_fn(|row| {
            core::array::from_fn(|col| Cell::at(Point::new(col as i32 * col_width, (row as i32 + 1) * row_height)))
        });

        Self {
            frame,
            row_height,
            col_width,
            cells,
            bindings,
            font,
            cycle: 0,
        }
    }

    #[inline]
    pub const fn frame(&self) -> &Frame { &self.frame }

    #[inline]
    pub const fn row_height(&self) -> i32 { self.row_height }

    #[inline]
    pub const fn col_width(&self) -> i32 { self.col_width }

    /// Number of updates seen so far.
    #[inline]
    pub const fn cycle(&self) -> u32 { self.cycle }

    /// Cell at `row`, `col`. Panics when out of range.
    pub fn cell(
        &self,
        row: usize,
        col: usize,
    ) -> &Cell {
        &self.cells[row][col]
    }

    /// Centering offset for `cell` under the surface's current font.
    ///
    /// Empty text is not measured and yields `(0, 0)`.
    pub fn text_offset<S: RenderSurface>(
        &self,
        cell: &Cell,
        surface: &S,
    ) -> Point {
        if cell.text().is_empty() {
            return Point::zero();
        }
        centering_offset(surface.text_bounds(cell.text()), self.col_width, self.row_height)
    }
}

impl<const ROWS: usize, const COLS: usize> Component for Table<ROWS, COLS> {
    fn update(
        &mut self,
        telemetry: &Telemetry,
    ) {
        for b in self.bindings {
            self.cells[b.row][b.col].text = b.field.render(telemetry, self.cycle);
        }
        debug!("table updated, cycle {}", self.cycle);
        self.cycle = self.cycle.wrapping_add(1);
    }

    fn paint<S: RenderSurface>(
        &self,
        surface: &mut S,
    ) {
        surface.set_font(self.font);
        paint_region(surface, &self.frame, |s| {
            s.clear_region(&self.frame);
            for cell in self.cells.iter().flatten().filter(|c| !c.text().is_empty()) {
                let cursor = self.frame.origin + cell.anchor() + self.text_offset(cell, s);
                s.draw_text(cell.text(), cursor);
            }
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
