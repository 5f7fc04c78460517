//! Simulator configuration constants.
//!
//! Screen layout and timing belong to the integrator, so they live here rather
//! than in the common crate. Timing uses `std::time::Duration`, which the
//! `no_std` common crate cannot depend on.

use std::time::Duration;

use weather_common::Frame;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (2.13" e-paper panel in landscape: 250x122)
pub const SCREEN_WIDTH: u32 = 250;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 122;

/// Rows per page of the emulated controller page buffer.
pub const PAGE_HEIGHT: u32 = 16;

/// Window pixel scale.
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Component Layout
// =============================================================================

/// Height of the text table across the top of the screen.
pub const TABLE_HEIGHT: i32 = 72;

/// 3x3 weather table.
pub const TABLE_FRAME: Frame = Frame::new(0, 0, SCREEN_WIDTH as i32, TABLE_HEIGHT);

/// Pressure trend chart filling the rest of the screen.
pub const CHART_FRAME: Frame = Frame::new(0, TABLE_HEIGHT, SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32 - TABLE_HEIGHT);

/// Hours of pressure history shown by the chart.
pub const HISTORY_HOURS: usize = 24;

/// Components registered on the overlay.
pub const MAX_COMPONENTS: usize = 4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Real time between driver cycles. The main loop sleeps if a cycle completes early.
pub const TICK: Duration = Duration::from_millis(500);

/// Simulated seconds that pass per tick, so the chart fills in minutes.
pub const SIM_SECONDS_PER_TICK: i64 = 900;

/// Simulated clock start (2023-03-16 14:15:54 UTC).
pub const SIM_EPOCH_START: i64 = 1_678_976_154;
