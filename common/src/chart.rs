//! Pressure trend chart (barometer).
//!
//! Keeps `N` hourly pressure samples, already scaled to bar heights in
//! pixels, and draws them as a bar chart growing right-to-left: the newest
//! sample is the rightmost bar.
//!
//! # Sampling Cadence
//!
//! `update` commits the first reading it sees, then only readings whose
//! timestamp has moved at least [`SAMPLE_INTERVAL_SECS`] past the last
//! committed one. Faster telemetry is ignored, late telemetry simply delays
//! the next sample. Slots never sampled hold 0 and paint as invisible bars.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::debug;

use crate::colors::INK;
use crate::component::Component;
use crate::config::{BAR_GAP, BAR_WIDTH, PRESSURE_MAX_HPA, PRESSURE_MIN_HPA, SAMPLE_INTERVAL_SECS};
use crate::geometry::Frame;
use crate::history::HistoryBuffer;
use crate::scale::linear_scale;
use crate::surface::{RenderSurface, paint_region};
use crate::telemetry::Telemetry;

const BAR_FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(INK);

/// Bar chart of the last `N` hourly pressure readings.
pub struct TrendChart<const N: usize> {
    frame: Frame,
    /// Bar heights in pixels, newest first.
    heights: HistoryBuffer<i32, N>,
    /// Timestamp of the last committed sample, epoch seconds.
    last_sample: Option<i64>,
}

impl<const N: usize> TrendChart<N> {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            heights: HistoryBuffer::new(),
            last_sample: None,
        }
    }

    #[inline]
    pub const fn frame(&self) -> &Frame { &self.frame }

    /// Committed bar heights, newest first.
    #[inline]
    pub const fn history(&self) -> &HistoryBuffer<i32, N> { &self.heights }

    /// Timestamp of the last committed sample, `None` before the first.
    #[inline]
    pub const fn last_sample(&self) -> Option<i64> { self.last_sample }

    /// Whether a reading at `timestamp` is due for a new sample.
    ///
    /// A timestamp so far from the last sample that the difference overflows
    /// counts as not elapsed.
    fn sample_due(
        &self,
        timestamp: i64,
    ) -> bool {
        match self.last_sample {
            None => true,
            Some(last) => timestamp.checked_sub(last).is_some_and(|dt| dt >= SAMPLE_INTERVAL_SECS),
        }
    }

    /// Bar height in pixels for a pressure reading.
    pub fn bar_height(
        &self,
        pressure_hpa: i32,
    ) -> i32 {
        linear_scale(pressure_hpa, PRESSURE_MIN_HPA, PRESSURE_MAX_HPA, 0, self.frame.height)
    }

    /// Screen rectangle of bar `index` (0 = newest) for a stored `height`.
    ///
    /// The bar's right edge sits at `frame.right - index * (width + gap)`,
    /// its base on the frame's bottom edge. Heights are clamped to the frame
    /// so nothing is drawn outside it.
    pub fn bar_rect(
        &self,
        index: usize,
        height: i32,
    ) -> Rectangle {
        let right = self.frame.right() - index as i32 * (BAR_WIDTH + BAR_GAP);
        let height = height.clamp(0, self.frame.height.max(0));
        Rectangle::new(
            Point::new(right - BAR_WIDTH, self.frame.bottom() - height),
            Size::new(BAR_WIDTH as u32, height as u32),
        )
    }
}

impl<const N: usize> Component for TrendChart<N> {
    fn update(
        &mut self,
        telemetry: &Telemetry,
    ) {
        if !self.sample_due(telemetry.timestamp) {
            return;
        }
        let height = self.bar_height(telemetry.pressure_hpa);
        self.heights.push_front_evict(height);
        self.last_sample = Some(telemetry.timestamp);
        debug!("barometer sample: {} hPa -> {} px at {}", telemetry.pressure_hpa, height, telemetry.timestamp);
    }

    fn paint<S: RenderSurface>(
        &self,
        surface: &mut S,
    ) {
        paint_region(surface, &self.frame, |s| {
            s.clear_region(&self.frame);
            for (i, height) in self.heights.iter().enumerate() {
                self.bar_rect(i, *height).into_styled(BAR_FILL).draw(s).ok();
            }
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
