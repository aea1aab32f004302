use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::forms::{check_amount, check_years, MAX_PROJECTION_YEARS};

/// Retail investment calculator: ROI, trailing average return and compound growth.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(long, global = true, env = "STOCKCALC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Calculate the return on investment.
    Roi {
        /// Initial investment ($)
        #[arg(long, value_parser = non_negative)]
        initial: f64,
        /// Final value ($)
        #[arg(long = "final", value_parser = non_negative)]
        final_value: f64,
    },
    /// Average return over the most recent periods of a price history.
    Performance {
        /// Historical prices, comma-separated and oldest first
        #[arg(long, required_unless_present = "prices_file", conflicts_with = "prices_file")]
        prices: Option<String>,
        /// CSV file with a `price` or `close` column
        #[arg(long)]
        prices_file: Option<PathBuf>,
        /// Number of most recent returns to average
        #[arg(long, value_parser = positive_usize)]
        period: usize,
        /// Write the price trend chart to the chart directory
        #[arg(long)]
        chart: bool,
    },
    /// Estimate a future value from a constant annual growth rate.
    Project {
        /// Current stock price ($)
        #[arg(long, value_parser = non_negative)]
        current: f64,
        /// Expected annual growth rate (%)
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        /// Years into the future, at most 1000
        #[arg(long, value_parser = projection_years)]
        years: u32,
        /// Write the projection chart to the chart directory
        #[arg(long)]
        chart: bool,
    },
}

fn non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    check_amount("Amount", value).map_err(|e| e.to_string())
}

fn positive_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(format!("`{}` must be a whole number of at least 1", s)),
    }
}

fn projection_years(s: &str) -> Result<u32, String> {
    let years = s.parse::<u32>().map_err(|_| {
        format!(
            "`{}` must be a whole number between 1 and {}",
            s, MAX_PROJECTION_YEARS
        )
    })?;
    check_years(years).map_err(|e| e.to_string())
}
