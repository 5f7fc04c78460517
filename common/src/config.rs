//! Engine configuration constants.
//!
//! Device layout (screen size, component frames) belongs to the integrator and
//! lives in the simulator crate. Only values that define component behavior
//! are kept here.

// =============================================================================
// Barometer Sampling
// =============================================================================

/// Minimum advance of the telemetry timestamp between two committed history
/// samples, in seconds. Telemetry arriving faster than this is ignored by the
/// barometer.
pub const SAMPLE_INTERVAL_SECS: i64 = 3600;

/// Lowest pressure mapped onto the chart (maps to a zero-height bar).
pub const PRESSURE_MIN_HPA: i32 = 950;

/// Highest pressure mapped onto the chart (maps to a full-height bar).
pub const PRESSURE_MAX_HPA: i32 = 1050;

// =============================================================================
// Barometer Bar Geometry
// =============================================================================

/// Width of a single history bar in pixels.
pub const BAR_WIDTH: i32 = 9;

/// Horizontal gap between neighbouring bars in pixels.
pub const BAR_GAP: i32 = 1;

// =============================================================================
// Text Capacities (heapless string sizes)
// =============================================================================

/// Maximum characters stored per table cell. Longer text is truncated.
pub const CELL_TEXT_LEN: usize = 16;

/// Maximum characters of the city name carried in telemetry.
pub const CITY_NAME_LEN: usize = 32;

/// Maximum characters of the weather condition carried in telemetry.
pub const CONDITION_LEN: usize = 16;

/// Knots per metre-per-second, as used for the wind cell.
pub const MS_TO_KNOTS: f32 = 1.94;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_range_not_degenerate() {
        assert!(PRESSURE_MIN_HPA < PRESSURE_MAX_HPA);
    }

    #[test]
    fn test_sample_interval_is_one_hour() {
        assert_eq!(SAMPLE_INTERVAL_SECS, 60 * 60);
    }

    #[test]
    fn test_bar_geometry_positive() {
        assert!(BAR_WIDTH > 0);
        assert!(BAR_GAP >= 0);
    }
}
