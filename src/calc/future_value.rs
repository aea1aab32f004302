use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::util::math_utils::round_report;

/// One year of a compound-growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
}

/// Value of `current` after compounding `growth_rate_pct` percent per year for
/// `years` years, rounded to two decimal places.
///
/// Defined for every rate, including negative and zero ones. Zero years
/// returns `current` rounded.
pub fn estimate_future_value(current: f64, growth_rate_pct: f64, years: u32) -> f64 {
    let growth_factor = 1.0 + growth_rate_pct / 100.0;
    round_report(current * growth_factor.powf(f64::from(years)))
}

/// The estimated value for every year from `0` through `years` inclusive.
pub fn project_growth(current: f64, growth_rate_pct: f64, years: u32) -> Vec<ProjectionPoint> {
    debug!(current, growth_rate_pct, years, "Projecting growth");
    (0..=years)
        .map(|year| ProjectionPoint {
            year,
            value: estimate_future_value(current, growth_rate_pct, year),
        })
        .collect()
}
