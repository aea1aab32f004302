use std::io::Write;

use tracing::info;

use crate::{
    args::Command,
    chart::{render_svg_file, LineChart},
    config::StockCalcConfig,
    data::PriceSeries,
    error::StockCalcError,
    forms::{PerformanceForm, ProjectionForm, RoiForm},
};

/// Runs one CLI subcommand, writing the report line (and the path of any saved
/// chart) to `out`.
pub fn run<W: Write>(
    command: &Command,
    config: &StockCalcConfig,
    out: &mut W,
) -> Result<(), StockCalcError> {
    match command {
        Command::Roi {
            initial,
            final_value,
        } => {
            let report = RoiForm::new(*initial, *final_value).evaluate()?;
            writeln!(out, "{}", report)?;
        }
        Command::Performance {
            prices,
            prices_file,
            period,
            chart,
        } => {
            let form = match (prices, prices_file) {
                (Some(text), _) => PerformanceForm::parse(text, *period)?,
                (None, Some(path)) => {
                    PerformanceForm::new(PriceSeries::from_csv_path(path)?, *period)
                }
                (None, None) => PerformanceForm::new(PriceSeries::default(), *period),
            };
            let report = form.evaluate()?;
            writeln!(out, "{}", report)?;
            if *chart {
                save_chart(&report.chart(), "price_trend", config, out)?;
            }
        }
        Command::Project {
            current,
            rate,
            years,
            chart,
        } => {
            let report = ProjectionForm::new(*current, *rate, *years).evaluate()?;
            writeln!(out, "{}", report)?;
            if *chart {
                save_chart(&report.chart(), "future_value_projection", config, out)?;
            }
        }
    }
    Ok(())
}

fn save_chart<W: Write>(
    chart: &LineChart,
    name: &str,
    config: &StockCalcConfig,
    out: &mut W,
) -> Result<(), StockCalcError> {
    let path = config.chart_path(name);
    render_svg_file(chart, &path, config.chart_width, config.chart_height)?;
    info!(path = %path.display(), "Saved chart");
    writeln!(out, "Chart saved to {}", path.display())?;
    Ok(())
}
