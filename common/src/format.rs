//! Text formatting for table cells.
//!
//! Pure functions over explicit inputs. Everything returns fixed-capacity
//! `heapless` strings or static labels, no allocation.

use core::fmt::Write;

use heapless::String;

use crate::config::MS_TO_KNOTS;

// =============================================================================
// Compass
// =============================================================================

/// 16-point compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Nearest of the 16 compass points for a wind direction in degrees.
///
/// Any integer is accepted; directions are normalised into `[0, 360)` first.
pub fn compass_point(deg: i32) -> &'static str {
    let deg = deg.rem_euclid(360);
    // round(deg / 22.5), in integer tenths
    let idx = ((deg * 10 + 112) / 225) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[idx]
}

// =============================================================================
// Wind
// =============================================================================

/// Wind speed in whole knots, truncated.
pub fn knots(speed_ms: f32) -> i32 { (speed_ms * MS_TO_KNOTS) as i32 }

// =============================================================================
// Names
// =============================================================================

const fn is_vowel(c: char) -> bool { matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U') }

/// Shorten a name by dropping vowels, keeping the first and last character.
///
/// `"Frankfurt"` becomes `"Frnkfrt"`, `"Oslo"` stays recognisable as `"Oslo"`.
/// Output longer than `N` is truncated.
pub fn strip_vowels<const N: usize>(text: &str) -> String<N> {
    let last = text.chars().count().saturating_sub(1);
    let mut out: String<N> = String::new();
    for (i, c) in text.chars().enumerate() {
        if (i == 0 || i == last || !is_vowel(c)) && out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Clock (Central European Time)
// =============================================================================

const SECS_PER_DAY: i64 = 86_400;

/// Convert days since 1970-01-01 into a civil `(year, month, day)` date.
///
/// Months and days are 1-based. Proleptic Gregorian calendar.
const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u32, day as u32)
}

/// EU daylight saving rule evaluated on a UTC date and hour.
///
/// Summer time runs from the last Sunday of March, 01:00 UTC, to the last
/// Sunday of October, 01:00 UTC. The last-Sunday formula holds for 1900-2099.
pub const fn is_eu_summer_time(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
) -> bool {
    let hour_of_month = (hour + 24 * day) as i64;
    match month {
        4..=9 => true,
        3 => hour_of_month >= 1 + 24 * (31 - (5 * year / 4 + 4) % 7),
        10 => hour_of_month < 1 + 24 * (31 - (5 * year / 4 + 1) % 7),
        _ => false,
    }
}

/// Wall-clock `H:MM` label for a Unix timestamp in Central European time.
///
/// UTC+1, or UTC+2 while EU summer time is in effect. Hours wrap past
/// midnight; minutes are zero-padded.
pub fn clock_label(epoch: i64) -> String<8> {
    let days = epoch.div_euclid(SECS_PER_DAY);
    let secs = epoch.rem_euclid(SECS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let hour = (secs / 3_600) as u32;
    let minute = (secs % 3_600) / 60;
    let offset = if is_eu_summer_time(year, month, day, hour) { 2 } else { 1 };

    let mut out: String<8> = String::new();
    let _ = write!(out, "{}:{:02}", (hour + offset) % 24, minute);
    out
}

// =============================================================================
// Tests
// =============================================================================
