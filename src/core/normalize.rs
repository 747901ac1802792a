//! Score normalization
//!
//! Every readability formula reports on its own native scale. The annotation
//! layer only understands eleven buckets, so raw scores are rescaled onto a
//! small integer range before a style is picked.

/// Lowest normalized score
pub const SCORE_MIN: u8 = 0;

/// Highest normalized score
pub const SCORE_MAX: u8 = 10;

/// Rescale `value` from `[source_min, source_max]` onto the default `[0, 10]` scale.
pub fn normalize(value: f64, source_min: f64, source_max: f64) -> u8 {
    let scaled = normalize_to(
        value,
        source_min,
        source_max,
        f64::from(SCORE_MIN),
        f64::from(SCORE_MAX),
    );
    scaled.clamp(i64::from(SCORE_MIN), i64::from(SCORE_MAX)) as u8
}

/// Rescale `value` from `[source_min, source_max]` onto `[target_min, target_max]`.
///
/// The fractional position is rounded to two decimals before it is applied to
/// the target range, then the result is rounded to the nearest integer.
/// Callers clamp `value` into the source range beforehand and guarantee
/// `source_min != source_max`.
pub fn normalize_to(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> i64 {
    debug_assert!(source_max != source_min, "empty source range");

    let fraction = (value - source_min) / (source_max - source_min);
    let fraction = (fraction * 100.0).round() / 100.0;

    (target_min + fraction * (target_max - target_min)).round() as i64
}
