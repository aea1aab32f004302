use proptest::prelude::*;
use stockcalc::{
    calc::{analyze_performance, compute_roi, estimate_future_value},
    util::math_utils::round_to,
};

fn non_zero_amount() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e9..-1.0e-6, 1.0e-6..1.0e9]
}

proptest! {
    #[test]
    fn roi_of_unchanged_value_is_zero(x in non_zero_amount()) {
        prop_assert_eq!(compute_roi(x, x), Some(0.0));
    }

    #[test]
    fn zero_years_returns_rounded_current(v in -1.0e9..1.0e9f64, r in -100.0..1000.0f64) {
        prop_assert_eq!(estimate_future_value(v, r, 0), round_to(v, 2));
    }

    #[test]
    fn zero_growth_returns_rounded_current(v in 0.0..1.0e9f64, years in 0u32..100) {
        prop_assert_eq!(estimate_future_value(v, 0.0, years), round_to(v, 2));
    }

    #[test]
    fn analysis_defined_iff_enough_prices(
        prices in prop::collection::vec(1.0..1.0e6f64, 0..20),
        period in 1usize..25,
    ) {
        let result = analyze_performance(&prices, period);
        let defined = prices.len() >= period && prices.len() >= 2;
        prop_assert_eq!(result.is_some(), defined);
        if let Some(average) = result {
            prop_assert!(average.is_finite());
        }
    }
}
