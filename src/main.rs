//! E-paper weather station simulator.
//!
//! Runs the weather display engine against a desktop window instead of the
//! e-paper panel. A synthetic feed replaces the network client; the simulated
//! clock runs fast enough that the pressure chart fills within minutes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────┬───────────┬────────┐
//! │ @clock  │ condition │  city  │
//! │  temp   │ humidity  │  wind  │  72px  Table<3, 3>
//! │pressure │ heartbeat │  dir   │
//! ├─────────┴───────────┴────────┤
//! │            ▖▖▌▌▌▌█           │  50px  TrendChart<24>
//! └──────────────────────────────┘
//!               250px
//! ```
//!
//! Each tick the driver updates and paints the table, then the chart. Both go
//! through a [`PagedSurface`] that only lets one page band of the selected
//! region through at a time, as the panel controller does.
//!
//! Set `RUST_LOG=debug` to see sampling decisions, `trace` for refresh passes.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod config;
mod driver;
mod feed;
mod widgets;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};
use profont::PROFONT_12_POINT;
use weather_common::PagedSurface;
use weather_common::colors::PAPER;

use crate::config::{PAGE_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TICK, WINDOW_SCALE};
use crate::driver::drive_cycle;
use crate::feed::WeatherFeed;
use crate::widgets::build_overlay;

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    display.clear(PAPER).ok();

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::LcdWhite)
        .scale(WINDOW_SCALE)
        .build();
    let mut window = Window::new("E-Paper Weather Sim", &output_settings);
    window.update(&display);

    let mut surface = PagedSurface::new(display, PAGE_HEIGHT, &PROFONT_12_POINT);
    let mut overlay = match build_overlay() {
        Ok(overlay) => overlay,
        Err(e) => {
            error!("failed to build overlay: {e}");
            return;
        }
    };
    let mut feed = WeatherFeed::new();
    info!("{} components registered, {} pages per full screen", overlay.len(), surface.page_count());

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let tick_start = Instant::now();

        for ev in window.events() {
            if let SimulatorEvent::Quit = ev {
                info!("window closed after {} refresh passes", surface.passes());
                return;
            }
        }

        let reading = feed.next_reading();
        drive_cycle(&mut overlay, &reading, &mut surface);
        window.update(surface.target());

        // Sleep for remaining tick time
        let elapsed = tick_start.elapsed();
        if elapsed < TICK {
            thread::sleep(TICK - elapsed);
        }
    }
}
