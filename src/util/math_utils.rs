/// Number of decimal places every reported figure is rounded to.
pub const REPORT_DECIMALS: u32 = 2;

/**
Rounds a value to a fixed number of decimal places.
Halfway cases are rounded away from zero (the behaviour of `f64::round`).
Non-finite values are returned unchanged.

## Arguments
- `value`: The value to round.
- `decimals`: The number of decimal places to keep.

## Returns
The rounded value.
 */
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Rounds to [`REPORT_DECIMALS`] places.
#[inline(always)]
pub fn round_report(value: f64) -> f64 {
    round_to(value, REPORT_DECIMALS)
}

/// Percentage change from `previous` to `current`. Not guarded against a zero
/// `previous`, which yields an infinite or NaN result.
#[inline(always)]
pub fn percentage_change(previous: f64, current: f64) -> f64 {
    (current - previous) / previous * 100.0
}

/**
Calculates the arithmetic mean of a slice of f64 values.

## Arguments
- `values`: A slice of f64 values.

## Returns
The mean, or `None` if the slice is empty. NaN and infinite values propagate.
 */
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
