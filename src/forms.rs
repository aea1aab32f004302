//! Immutable inputs for each user action and the reports they produce.
//!
//! A form is built from what the user entered, evaluated once, and
//! discarded. Evaluation runs the matching calculator from [`crate::calc`] and
//! turns an undefined result into the [`StockCalcError`] the user should see.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    calc::{
        average_return, compute_roi, estimate_future_value, project_growth, trailing_returns,
        ProjectionPoint,
    },
    chart::{ChartColor, LineChart},
    data::PriceSeries,
    error::StockCalcError,
};

/// Longest horizon a projection may cover. Each year is one point in the
/// report and the chart.
pub const MAX_PROJECTION_YEARS: u32 = 1000;

/// Amounts entered by the user are money values: finite and not negative.
pub fn check_amount(field: &'static str, value: f64) -> Result<f64, StockCalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StockCalcError::InvalidAmount { field, value })
    }
}

pub fn check_years(years: u32) -> Result<u32, StockCalcError> {
    if (1..=MAX_PROJECTION_YEARS).contains(&years) {
        Ok(years)
    } else {
        Err(StockCalcError::InvalidYears {
            years,
            max: MAX_PROJECTION_YEARS,
        })
    }
}

fn check_finite(what: &str, value: f64) -> Result<f64, StockCalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(value, "{} is not finite", what);
        Err(StockCalcError::NonFiniteResult(what.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiForm {
    pub initial_investment: f64,
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub initial_investment: f64,
    pub final_value: f64,
    pub roi_pct: f64,
}

impl RoiForm {
    pub fn new(initial_investment: f64, final_value: f64) -> Self {
        Self {
            initial_investment,
            final_value,
        }
    }

    pub fn evaluate(&self) -> Result<RoiReport, StockCalcError> {
        check_amount("Initial investment", self.initial_investment)?;
        check_amount("Final value", self.final_value)?;
        let roi_pct = compute_roi(self.initial_investment, self.final_value)
            .ok_or(StockCalcError::ZeroInitialInvestment)?;
        let roi_pct = check_finite("return on investment", roi_pct)?;
        info!(roi_pct, "ROI calculated");
        Ok(RoiReport {
            initial_investment: self.initial_investment,
            final_value: self.final_value,
            roi_pct,
        })
    }
}

impl fmt::Display for RoiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Return on Investment: {:?}%", self.roi_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceForm {
    pub prices: PriceSeries,
    pub period: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub period: usize,
    pub average_return_pct: f64,
    /// The returns that were averaged, oldest first.
    pub window_returns: Vec<f64>,
    pub prices: PriceSeries,
}

impl PerformanceForm {
    pub fn new(prices: PriceSeries, period: usize) -> Self {
        Self { prices, period }
    }

    /// Builds the form from comma-separated price text. A malformed entry
    /// fails here, before any analysis is attempted.
    pub fn parse(prices: &str, period: usize) -> Result<Self, StockCalcError> {
        let prices = prices.parse::<PriceSeries>()?;
        Ok(Self::new(prices, period))
    }

    pub fn evaluate(&self) -> Result<PerformanceReport, StockCalcError> {
        if self.period == 0 {
            return Err(StockCalcError::InvalidPeriod);
        }
        let insufficient = || StockCalcError::InsufficientHistory {
            prices: self.prices.len(),
            period: self.period,
        };
        if self.prices.len() < self.period {
            return Err(insufficient());
        }
        if self.prices.len() < 2 {
            return Err(StockCalcError::NoReturns(self.prices.len()));
        }
        let window_returns = trailing_returns(&self.prices, self.period).ok_or_else(insufficient)?;
        let average_return_pct = average_return(&window_returns).ok_or_else(insufficient)?;
        let average_return_pct = check_finite("average return", average_return_pct)?;
        info!(
            period = self.period,
            average_return_pct, "Performance analyzed"
        );
        Ok(PerformanceReport {
            period: self.period,
            average_return_pct,
            window_returns,
            prices: self.prices.clone(),
        })
    }
}

impl PerformanceReport {
    /// Price against day index.
    pub fn chart(&self) -> LineChart {
        LineChart {
            title: "Stock Price Trend".to_string(),
            x_label: "Time (Days)".to_string(),
            y_label: "Price ($)".to_string(),
            series_label: "Stock Prices".to_string(),
            color: ChartColor::Blue,
            points: self
                .prices
                .iter()
                .enumerate()
                .map(|(i, &price)| (i as f64, price))
                .collect(),
        }
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Return over {} days: {:?}%",
            self.period, self.average_return_pct
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionForm {
    pub current_value: f64,
    pub growth_rate_pct: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub current_value: f64,
    pub growth_rate_pct: f64,
    pub years: u32,
    pub future_value: f64,
    pub projection: Vec<ProjectionPoint>,
}

impl ProjectionForm {
    pub fn new(current_value: f64, growth_rate_pct: f64, years: u32) -> Self {
        Self {
            current_value,
            growth_rate_pct,
            years,
        }
    }

    /// Fails when the horizon is outside `1..=MAX_PROJECTION_YEARS` or when
    /// the compounded value overflows `f64`.
    pub fn evaluate(&self) -> Result<ProjectionReport, StockCalcError> {
        check_amount("Current value", self.current_value)?;
        check_years(self.years)?;
        let future_value = check_finite(
            "future value",
            estimate_future_value(self.current_value, self.growth_rate_pct, self.years),
        )?;
        let projection = project_growth(self.current_value, self.growth_rate_pct, self.years);
        for point in &projection {
            check_finite("future value", point.value)?;
        }
        info!(future_value, years = self.years, "Future value estimated");
        Ok(ProjectionReport {
            current_value: self.current_value,
            growth_rate_pct: self.growth_rate_pct,
            years: self.years,
            future_value,
            projection,
        })
    }
}

impl ProjectionReport {
    /// Estimated value against year.
    pub fn chart(&self) -> LineChart {
        LineChart {
            title: "Future Stock Value Projection".to_string(),
            x_label: "Years".to_string(),
            y_label: "Estimated Value ($)".to_string(),
            series_label: "Projected Growth".to_string(),
            color: ChartColor::Green,
            points: self
                .projection
                .iter()
                .map(|p| (f64::from(p.year), p.value))
                .collect(),
        }
    }
}

impl fmt::Display for ProjectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Estimated Future Value: ${:?}", self.future_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_form() {
        let report = RoiForm::new(1000.0, 1200.0).evaluate().unwrap();
        assert_eq!(report.roi_pct, 20.0);
        assert_eq!(report.to_string(), "Return on Investment: 20.0%");
    }

    #[test]
    fn test_roi_form_overflow_is_rejected() {
        let result = RoiForm::new(1e-300, 1e300).evaluate();
        assert!(matches!(result, Err(StockCalcError::NonFiniteResult(_))));
    }

    #[test]
    fn test_roi_form_negative_amount() {
        let result = RoiForm::new(100.0, -5.0).evaluate();
        assert!(matches!(
            result,
            Err(StockCalcError::InvalidAmount {
                field: "Final value",
                ..
            })
        ));
    }

    #[test]
    fn test_roi_form_zero_initial() {
        let result = RoiForm::new(0.0, 1000.0).evaluate();
        assert!(matches!(result, Err(StockCalcError::ZeroInitialInvestment)));
    }

    #[test]
    fn test_performance_form() {
        let form = PerformanceForm::parse("100, 105, 110, 120, 130", 3).unwrap();
        let report = form.evaluate().unwrap();
        assert_eq!(report.average_return_pct, 7.4);
        assert_eq!(report.window_returns.len(), 3);
        assert_eq!(report.to_string(), "Average Return over 3 days: 7.4%");
    }

    #[test]
    fn test_performance_form_malformed() {
        let result = PerformanceForm::parse("100, 105, ten", 2);
        assert!(matches!(
            result,
            Err(StockCalcError::MalformedInput { position: 3, .. })
        ));
    }

    #[test]
    fn test_performance_form_insufficient_history() {
        let form = PerformanceForm::parse("100, 105, 110", 10).unwrap();
        match form.evaluate() {
            Err(StockCalcError::InsufficientHistory { prices, period }) => {
                assert_eq!(prices, 3);
                assert_eq!(period, 10);
            }
            other => panic!("Expected InsufficientHistory, got {:?}", other),
        }
    }

    #[test]
    fn test_performance_form_zero_period() {
        let form = PerformanceForm::parse("100, 105", 0).unwrap();
        assert!(matches!(form.evaluate(), Err(StockCalcError::InvalidPeriod)));
    }

    #[test]
    fn test_performance_form_single_price() {
        let form = PerformanceForm::parse("100", 1).unwrap();
        let err = form.evaluate().unwrap_err();
        assert!(matches!(err, StockCalcError::NoReturns(1)));
        assert!(!err.to_string().contains("period"));
    }

    #[test]
    fn test_performance_form_zero_price() {
        let form = PerformanceForm::parse("100, 0, 50", 2).unwrap();
        assert!(matches!(
            form.evaluate(),
            Err(StockCalcError::NonFiniteResult(_))
        ));
    }

    #[test]
    fn test_performance_chart() {
        let report = PerformanceForm::parse("10, 11, 12", 2)
            .unwrap()
            .evaluate()
            .unwrap();
        let chart = report.chart();
        assert_eq!(chart.points, vec![(0.0, 10.0), (1.0, 11.0), (2.0, 12.0)]);
        assert_eq!(chart.color, ChartColor::Blue);
    }

    #[test]
    fn test_projection_form() {
        let report = ProjectionForm::new(100.0, 10.0, 3).evaluate().unwrap();
        assert_eq!(report.future_value, 133.1);
        assert_eq!(report.projection.len(), 4);
        assert_eq!(report.projection.last().unwrap().value, report.future_value);
        assert_eq!(report.to_string(), "Estimated Future Value: $133.1");
        let report = ProjectionForm::new(200.0, 0.0, 5).evaluate().unwrap();
        assert_eq!(report.to_string(), "Estimated Future Value: $200.0");
    }

    #[test]
    fn test_projection_form_years_out_of_range() {
        for years in [0, MAX_PROJECTION_YEARS + 1, u32::MAX] {
            let result = ProjectionForm::new(100.0, 10.0, years).evaluate();
            assert!(matches!(
                result,
                Err(StockCalcError::InvalidYears { max: MAX_PROJECTION_YEARS, .. })
            ));
        }
        assert!(ProjectionForm::new(100.0, 1.0, MAX_PROJECTION_YEARS)
            .evaluate()
            .is_ok());
    }

    #[test]
    fn test_projection_form_overflow_is_rejected() {
        let result = ProjectionForm::new(1e300, 1000.0, 500).evaluate();
        assert!(matches!(result, Err(StockCalcError::NonFiniteResult(_))));
    }

    #[test]
    fn test_projection_chart() {
        let chart = ProjectionForm::new(100.0, 10.0, 2)
            .evaluate()
            .unwrap()
            .chart();
        assert_eq!(chart.points, vec![(0.0, 100.0), (1.0, 110.0), (2.0, 121.0)]);
        assert_eq!(chart.title, "Future Stock Value Projection");
    }

    #[test]
    fn test_forms_deserialize() {
        let form: ProjectionForm = serde_json::from_str(
            r#"{"current_value": 50.0, "growth_rate_pct": 5.0, "years": 2}"#,
        )
        .unwrap();
        assert_eq!(form, ProjectionForm::new(50.0, 5.0, 2));
        let form: PerformanceForm =
            serde_json::from_str(r#"{"prices": [1.0, 2.0], "period": 1}"#).unwrap();
        assert_eq!(form.prices.as_slice(), &[1.0, 2.0]);
    }
}
