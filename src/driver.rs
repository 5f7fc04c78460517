//! One refresh cycle over every registered component.

use weather_common::{Component, Overlay, RenderSurface, Telemetry};

/// Fold `telemetry` into each component, then redraw it.
///
/// Components run in registration order, and each finishes its whole page
/// loop before the next one starts.
pub fn drive_cycle<C, S, const N: usize>(
    overlay: &mut Overlay<C, N>,
    telemetry: &Telemetry,
    surface: &mut S,
) where
    C: Component,
    S: RenderSurface,
{
    for component in overlay.components_mut() {
        component.update(telemetry);
        component.paint(surface);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics_simulator::SimulatorDisplay;
    use profont::PROFONT_12_POINT;
    use weather_common::PagedSurface;

    use super::*;
    use crate::config::{CHART_FRAME, PAGE_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TABLE_FRAME};
    use crate::feed::WeatherFeed;
    use crate::widgets::{Widget, build_overlay};

    fn screen() -> PagedSurface<SimulatorDisplay<BinaryColor>> {
        PagedSurface::new(
            SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            PAGE_HEIGHT,
            &PROFONT_12_POINT,
        )
    }

    fn ink_in(
        display: &SimulatorDisplay<BinaryColor>,
        frame: &weather_common::Frame,
    ) -> usize {
        frame
            .to_rectangle()
            .points()
            .filter(|p| display.get_pixel(*p) == BinaryColor::On)
            .count()
    }

    #[test]
    fn test_cycle_paints_every_component() {
        let mut overlay = build_overlay().unwrap();
        let mut feed = WeatherFeed::new();
        let mut surface = screen();

        drive_cycle(&mut overlay, &feed.next_reading(), &mut surface);

        // one completed page loop per component
        assert_eq!(surface.passes(), 2);
        assert!(ink_in(surface.target(), &TABLE_FRAME) > 0);
        // first reading lands on the chart as the newest bar
        assert!(ink_in(surface.target(), &CHART_FRAME) > 0);
    }

    #[test]
    fn test_cycles_advance_heartbeat_and_history() {
        let mut overlay = build_overlay().unwrap();
        let mut feed = WeatherFeed::new();
        let mut surface = screen();

        for _ in 0..8 {
            drive_cycle(&mut overlay, &feed.next_reading(), &mut surface);
        }

        assert_eq!(surface.passes(), 16);
        for widget in overlay.components() {
            match widget {
                Widget::Table(t) => {
                    assert_eq!(t.cycle(), 8);
                    assert_eq!(t.cell(2, 1).text(), "7");
                }
                Widget::Barometer(b) => {
                    // 8 ticks of 15 simulated minutes: samples at 0h, 1h
                    assert_eq!(b.history().iter().filter(|h| **h > 0).count(), 2);
                }
            }
        }
    }

    #[test]
    fn test_empty_overlay_draws_nothing() {
        let mut overlay: Overlay<Widget, 2> = Overlay::new();
        let mut surface = PagedSurface::new(MockDisplay::<BinaryColor>::new(), 8, &PROFONT_12_POINT);
        drive_cycle(&mut overlay, &Telemetry::default(), &mut surface);
        assert_eq!(surface.passes(), 0);
    }
}
