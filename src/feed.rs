//! Synthetic telemetry for the simulator.
//!
//! Every reading is a sine wave over a simulated clock, each with its own
//! frequency so the cells do not move in lockstep. The clock runs
//! [`SIM_SECONDS_PER_TICK`] per tick, so the barometer commits a new bar every
//! few ticks instead of once an hour.

use weather_common::Telemetry;
use weather_common::telemetry::truncated;

use crate::config::{SIM_EPOCH_START, SIM_SECONDS_PER_TICK};

const CITY: &str = "Amsterdam";

const CONDITIONS: [&str; 5] = ["Clear", "Clouds", "Drizzle", "Rain", "Mist"];

/// Ticks spent on each condition before moving to the next.
const CONDITION_TICKS: u64 = 12;

/// Generate a smooth sine wave between `min` and `max`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Telemetry source driven by a simulated clock.
pub struct WeatherFeed {
    tick: u64,
}

impl WeatherFeed {
    pub const fn new() -> Self { Self { tick: 0 } }

    /// Simulated epoch timestamp of the next reading.
    pub const fn timestamp(&self) -> i64 { SIM_EPOCH_START + self.tick as i64 * SIM_SECONDS_PER_TICK }

    /// Produce the reading for the current tick and advance the clock.
    pub fn next_reading(&mut self) -> Telemetry {
        let t = self.tick as f32;
        let condition = CONDITIONS[(self.tick / CONDITION_TICKS) as usize % CONDITIONS.len()];
        let reading = Telemetry {
            timestamp: self.timestamp(),
            temperature_c: fake_signal(t, -5.0, 28.0, 0.07),
            humidity_pct: fake_signal(t, 35.0, 95.0, 0.11) as i32,
            pressure_hpa: fake_signal(t, 965.0, 1035.0, 0.03) as i32,
            wind_speed_ms: fake_signal(t, 0.0, 15.0, 0.13),
            wind_deg: fake_signal(t, 0.0, 359.0, 0.05) as i32,
            city: truncated(CITY),
            condition: truncated(condition),
        };
        self.tick += 1;
        reading
    }
}

impl Default for WeatherFeed {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_signal_stays_in_range() {
        for i in 0..500 {
            let v = fake_signal(i as f32 * 0.37, 965.0, 1035.0, 0.03);
            assert!((965.0..=1035.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_fake_signal_starts_at_midpoint() {
        assert!((fake_signal(0.0, 0.0, 10.0, 1.0) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clock_advances_per_reading() {
        let mut feed = WeatherFeed::new();
        let a = feed.next_reading();
        let b = feed.next_reading();
        assert_eq!(a.timestamp, SIM_EPOCH_START);
        assert_eq!(b.timestamp - a.timestamp, SIM_SECONDS_PER_TICK);
        assert_eq!(feed.timestamp(), SIM_EPOCH_START + 2 * SIM_SECONDS_PER_TICK);
    }

    #[test]
    fn test_readings_stay_in_plausible_ranges() {
        let mut feed = WeatherFeed::default();
        for _ in 0..200 {
            let r = feed.next_reading();
            assert!((965..=1035).contains(&r.pressure_hpa));
            assert!((35..=95).contains(&r.humidity_pct));
            assert!((0..360).contains(&r.wind_deg));
            assert_eq!(r.city.as_str(), CITY);
            assert!(CONDITIONS.contains(&r.condition.as_str()));
        }
    }

    #[test]
    fn test_condition_rotates() {
        let mut feed = WeatherFeed::new();
        let first = feed.next_reading().condition;
        for _ in 1..CONDITION_TICKS {
            assert_eq!(feed.next_reading().condition, first);
        }
        assert_ne!(feed.next_reading().condition, first);
    }
}
