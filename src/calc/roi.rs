use tracing::debug;

use crate::util::math_utils::{percentage_change, round_report};

/// Return on investment as a percentage, rounded to two decimal places.
///
/// Returns `None` when `initial` is exactly zero. Negative and fractional
/// amounts are accepted as-is.
pub fn compute_roi(initial: f64, final_value: f64) -> Option<f64> {
    if initial == 0.0 {
        debug!("ROI requested with a zero initial investment");
        return None;
    }
    let roi = round_report(percentage_change(initial, final_value));
    debug!(initial, final_value, roi, "Computed ROI");
    Some(roi)
}
