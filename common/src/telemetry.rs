//! Telemetry snapshot consumed by components.
//!
//! Fetching and decoding the weather payload happens outside this crate; the
//! integrator fills one of these per driver cycle. Field ranges are not
//! validated here.

use heapless::String;

use crate::config::{CITY_NAME_LEN, CONDITION_LEN};

/// One sample of environmental readings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Telemetry {
    /// Measurement time, Unix epoch seconds.
    pub timestamp: i64,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub humidity_pct: i32,
    /// Sea-level pressure in hPa.
    pub pressure_hpa: i32,
    /// Wind speed in metres per second.
    pub wind_speed_ms: f32,
    /// Wind direction in degrees (meteorological, 0 = north).
    pub wind_deg: i32,
    /// Station or city name.
    pub city: String<CITY_NAME_LEN>,
    /// Short weather condition, e.g. "Clouds".
    pub condition: String<CONDITION_LEN>,
}

/// Copy `text` into a fixed-capacity string, truncating at capacity.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
