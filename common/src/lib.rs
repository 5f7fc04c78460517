//! Rendering composition and trend sampling for a weather e-paper display.
//!
//! This crate holds the platform-agnostic engine shared by the simulator and
//! any board integration. It never fetches telemetry and never drives a
//! panel directly; both arrive through the types below.
//!
//! - [`geometry`]: Display rectangles owned by components
//! - [`surface`]: Paged render surface abstraction and its GxEPD2-style implementation
//! - [`component`]: The update/paint contract every widget implements
//! - [`overlay`]: Registry owning the components in draw order
//! - [`table`]: Grid of centered text cells bound to telemetry fields
//! - [`chart`]: Hourly pressure trend bar chart
//! - [`history`]: Fixed-capacity newest-first sample buffer
//! - [`scale`]: Integer linear range mapping
//! - [`format`]: Text helpers (clock, compass, vowel stripping)
//! - [`telemetry`]: Weather reading snapshot
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. All storage is fixed-capacity
//! (`heapless` strings and vectors, const-generic arrays).

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod chart;
pub mod colors;
pub mod component;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod history;
pub mod overlay;
pub mod scale;
pub mod surface;
pub mod table;
pub mod telemetry;

#[cfg(test)]
mod test_canvas;

// Re-export commonly used items
pub use chart::TrendChart;
pub use component::Component;
pub use error::Error;
pub use geometry::Frame;
pub use history::HistoryBuffer;
pub use overlay::Overlay;
pub use scale::linear_scale;
pub use surface::{PagedSurface, RenderSurface, paint_region};
pub use table::{Cell, CellBinding, Field, Table};
pub use telemetry::Telemetry;
