//! Device layout: which components share the screen and where.

use profont::PROFONT_12_POINT;
use weather_common::{CellBinding, Component, Error, Field, Overlay, RenderSurface, Table, Telemetry, TrendChart};

use crate::config::{CHART_FRAME, HISTORY_HOURS, MAX_COMPONENTS, TABLE_FRAME};

/// 3x3 table layout.
///
/// ```text
/// ┌─────────┬───────────┬────────┐
/// │ @clock  │ condition │  city  │
/// ├─────────┼───────────┼────────┤
/// │  temp   │ humidity  │  wind  │
/// ├─────────┼───────────┼────────┤
/// │pressure │ heartbeat │  dir   │
/// └─────────┴───────────┴────────┘
/// ```
pub const WEATHER_BINDINGS: [CellBinding; 9] = [
    CellBinding::new(0, 0, Field::Clock),
    CellBinding::new(0, 1, Field::Condition),
    CellBinding::new(0, 2, Field::City),
    CellBinding::new(1, 0, Field::Temperature),
    CellBinding::new(1, 1, Field::Humidity),
    CellBinding::new(1, 2, Field::WindKnots),
    CellBinding::new(2, 0, Field::Pressure),
    CellBinding::new(2, 1, Field::Heartbeat),
    CellBinding::new(2, 2, Field::WindDirection),
];

/// Every component kind the simulator puts on screen.
pub enum Widget {
    Table(Table<3, 3>),
    Barometer(TrendChart<HISTORY_HOURS>),
}

impl Component for Widget {
    fn update(
        &mut self,
        telemetry: &Telemetry,
    ) {
        match self {
            Self::Table(t) => t.update(telemetry),
            Self::Barometer(b) => b.update(telemetry),
        }
    }

    fn paint<S: RenderSurface>(
        &self,
        surface: &mut S,
    ) {
        match self {
            Self::Table(t) => t.paint(surface),
            Self::Barometer(b) => b.paint(surface),
        }
    }
}

pub type WeatherOverlay = Overlay<Widget, MAX_COMPONENTS>;

/// Table on top, barometer below, in that draw order.
pub fn build_overlay() -> Result<WeatherOverlay, Error> {
    let mut overlay = WeatherOverlay::new();
    overlay.register(Widget::Table(Table::new(TABLE_FRAME, &WEATHER_BINDINGS, &PROFONT_12_POINT)))?;
    overlay.register(Widget::Barometer(TrendChart::new(CHART_FRAME)))?;
    Ok(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_cover_every_cell_once() {
        let mut seen = [[false; 3]; 3];
        for b in &WEATHER_BINDINGS {
            assert!(!seen[b.row][b.col], "cell ({}, {}) bound twice", b.row, b.col);
            seen[b.row][b.col] = true;
        }
        assert!(seen.iter().flatten().all(|s| *s));
    }

    #[test]
    fn test_build_overlay_order() {
        let overlay = build_overlay().unwrap();
        assert_eq!(overlay.len(), 2);
        assert!(matches!(overlay.components()[0], Widget::Table(_)));
        assert!(matches!(overlay.components()[1], Widget::Barometer(_)));
    }

    #[test]
    fn test_widget_frames_match_layout() {
        let overlay = build_overlay().unwrap();
        for widget in overlay.components() {
            match widget {
                Widget::Table(t) => assert_eq!(*t.frame(), TABLE_FRAME),
                Widget::Barometer(b) => assert_eq!(*b.frame(), CHART_FRAME),
            }
        }
    }
}
