use tracing::debug;

use crate::util::math_utils::{mean, percentage_change, round_report};

/// Period-over-period percentage returns, oldest first.
///
/// A series of `n` prices yields `n - 1` returns. A zero price is not guarded
/// against and produces an infinite or NaN return for the following period.
pub fn period_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| percentage_change(w[0], w[1]))
        .collect()
}

/// The most recent `period` returns of the series that `analyze_performance`
/// averages, or `None` when that analysis is undefined.
///
/// The history check compares `period` with the number of *prices*, not the
/// number of returns. A period equal to the price count therefore passes and
/// the window silently shrinks to every available return.
pub fn trailing_returns(prices: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 {
        debug!("Performance analysis requested with a zero period");
        return None;
    }
    if prices.len() < period {
        debug!(
            prices = prices.len(),
            period, "Not enough price history for the requested period"
        );
        return None;
    }
    let returns = period_returns(prices);
    if returns.is_empty() {
        debug!("A single price has no returns to average");
        return None;
    }
    let start = returns.len().saturating_sub(period);
    Some(returns[start..].to_vec())
}

/// Mean of an already selected window of returns, rounded for reporting.
/// `None` for an empty window.
pub fn average_return(window: &[f64]) -> Option<f64> {
    mean(window).map(round_report)
}

/// Mean of the most recent `period` period-over-period returns, as a
/// percentage rounded to two decimal places.
///
/// Returns `None` when the series holds fewer than `period` prices, when
/// `period` is zero, or when the series has a single price. Zero prices
/// propagate as a non-finite result.
pub fn analyze_performance(prices: &[f64], period: usize) -> Option<f64> {
    let window = trailing_returns(prices, period)?;
    let average = average_return(&window)?;
    debug!(
        prices = prices.len(),
        period,
        observations = window.len(),
        average,
        "Analyzed performance"
    );
    Some(average)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICES: [f64; 5] = [100.0, 105.0, 110.0, 120.0, 130.0];

    #[test]
    fn test_period_returns() {
        let returns = period_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 10.0).abs() < 1e-9);
        assert!((returns[1] + 10.0).abs() < 1e-9);
        assert!(period_returns(&[100.0]).is_empty());
        assert!(period_returns(&[]).is_empty());
    }

    #[test]
    fn test_analyze_performance_window() {
        // Last three returns: 105->110, 110->120, 120->130
        let expected = (10.0 / 110.0 + 10.0 / 120.0 + 5.0 / 105.0) * 100.0 / 3.0;
        let average = analyze_performance(&PRICES, 3).unwrap();
        assert!(average.is_finite());
        assert!((average - expected).abs() <= 0.005);
        assert_eq!(average, 7.4);
    }

    #[test]
    fn test_analyze_performance_insufficient_history() {
        assert_eq!(analyze_performance(&PRICES, 10), None);
        assert_eq!(analyze_performance(&PRICES, 6), None);
        assert_eq!(analyze_performance(&[], 1), None);
    }

    #[test]
    fn test_period_equal_to_price_count_uses_all_returns() {
        let all = analyze_performance(&PRICES, PRICES.len()).unwrap();
        let four = analyze_performance(&PRICES, PRICES.len() - 1).unwrap();
        assert_eq!(all, four);
        assert_eq!(trailing_returns(&PRICES, PRICES.len()).unwrap().len(), 4);
    }

    #[test]
    fn test_analyze_performance_rising_series() {
        let prices = [50.0, 52.0, 54.0, 58.0, 60.0, 65.0, 70.0];
        assert!(analyze_performance(&prices, 5).unwrap() > 0.0);
    }

    #[test]
    fn test_analyze_performance_falling_series() {
        let prices = [100.0, 90.0, 81.0];
        assert_eq!(analyze_performance(&prices, 2), Some(-10.0));
    }

    #[test]
    fn test_analyze_performance_zero_period() {
        assert_eq!(analyze_performance(&PRICES, 0), None);
        assert_eq!(trailing_returns(&PRICES, 0), None);
    }

    #[test]
    fn test_average_return_of_window_matches_analysis() {
        let window = trailing_returns(&PRICES, 3).unwrap();
        assert_eq!(average_return(&window), analyze_performance(&PRICES, 3));
        assert_eq!(average_return(&[]), None);
    }

    #[test]
    fn test_analyze_performance_single_price() {
        assert_eq!(analyze_performance(&[100.0], 1), None);
    }

    #[test]
    fn test_analyze_performance_zero_price_propagates() {
        let average = analyze_performance(&[100.0, 0.0, 10.0], 2).unwrap();
        assert!(!average.is_finite());
        // A zero price outside the window does not affect the result
        assert_eq!(analyze_performance(&[0.0, 100.0, 110.0], 1), Some(10.0));
    }
}
