//! Numeric conversion helpers centralizing safe numeric casts and clamps.

use num_traits::cast::cast;

use crate::constants::{PCT_MAX, REPUTATION_MAX};

/// Clamp a value into a percentage-like field range of [0, 100].
#[must_use]
pub fn clamp_pct(value: i64) -> i32 {
    let clamped = value.clamp(0, i64::from(PCT_MAX));
    cast::<i64, i32>(clamped).unwrap_or(0)
}

/// Floor a currency amount at zero; money, capital and budget never go negative.
#[must_use]
pub const fn clamp_currency(value: i64) -> i64 {
    if value < 0 { 0 } else { value }
}

/// Clamp reputation into [0, 1000].
#[must_use]
pub fn clamp_reputation(value: i64) -> i32 {
    let clamped = value.clamp(0, i64::from(REPUTATION_MAX));
    cast::<i64, i32>(clamped).unwrap_or(0)
}

/// Clamp a f64 into [min, max], mapping non-finite values to `min`.
#[must_use]
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Floor a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).floor();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}
