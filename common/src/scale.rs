//! Linear value-to-pixel scaling.

use log::warn;

/// Map `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// Integer math, the division truncates toward zero. The intermediate
/// product is widened to 64 bits so hPa-to-pixel ranges cannot overflow.
///
/// A degenerate source range (`src_min >= src_max`) is not divided by: a
/// warning is logged and `0` is returned. When `dst_min` is also `0` a
/// returned `0` is therefore ambiguous.
pub fn linear_scale(
    value: i32,
    src_min: i32,
    src_max: i32,
    dst_min: i32,
    dst_max: i32,
) -> i32 {
    if src_min >= src_max {
        warn!("linear_scale: degenerate source range, min {src_min} >= max {src_max}");
        return 0;
    }

    let span = i64::from(src_max) - i64::from(src_min);
    let scaled = (i64::from(value) - i64::from(src_min)) * (i64::from(dst_max) - i64::from(dst_min)) / span;
    (scaled + i64::from(dst_min)) as i32
}

// =============================================================================
// Tests
// =============================================================================
