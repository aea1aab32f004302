use std::{fs, ops::Range, path::Path};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::error::StockCalcError;

/// Fraction of the data span added on each side of an axis.
const AXIS_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColor {
    Blue,
    Green,
}

impl ChartColor {
    fn rgb(self) -> RGBColor {
        match self {
            ChartColor::Blue => BLUE,
            ChartColor::Green => GREEN,
        }
    }
}

/// A single-series line chart with point markers.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub color: ChartColor,
    pub points: Vec<(f64, f64)>,
}

impl LineChart {
    /// Axis ranges covering every point, padded on each side. A flat or
    /// single-point axis is widened by one unit each way.
    pub fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        if self.points.is_empty() {
            return None;
        }
        let (x_min, x_max) = min_max(self.points.iter().map(|p| p.0));
        let (y_min, y_max) = min_max(self.points.iter().map(|p| p.1));
        Some((pad(x_min, x_max), pad(y_min, y_max)))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    (min - span * AXIS_PADDING)..(max + span * AXIS_PADDING)
}

fn chart_error<E: std::fmt::Display>(e: E) -> StockCalcError {
    StockCalcError::ChartError(e.to_string())
}

/// Renders the chart as an SVG document.
pub fn render_svg_string(
    chart: &LineChart,
    width: u32,
    height: u32,
) -> Result<String, StockCalcError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw(chart, &root)?;
    }
    Ok(svg)
}

/// Renders the chart as an SVG file, creating missing parent directories.
pub fn render_svg_file(
    chart: &LineChart,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), StockCalcError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    draw(chart, &root)?;
    info!(path = %path.display(), "Chart written");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    chart: &LineChart,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), StockCalcError> {
    let (x_range, y_range) = chart
        .bounds()
        .ok_or_else(|| StockCalcError::ChartError("no points to plot".to_string()))?;
    debug!(title = %chart.title, points = chart.points.len(), "Drawing chart");

    let color = chart.color.rgb();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut context = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_error)?;

    context
        .configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(chart_error)?;

    context
        .draw_series(LineSeries::new(
            chart.points.iter().copied(),
            color.stroke_width(2),
        ))
        .map_err(chart_error)?
        .label(chart.series_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

    context
        .draw_series(
            chart
                .points
                .iter()
                .map(|&point| Circle::new(point, 3, color.filled())),
        )
        .map_err(chart_error)?;

    context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}
