use std::{fmt, ops::Deref, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StockCalcError;

/// Column names recognised as the price column of a CSV file, in order of
/// preference.
const PRICE_COLUMNS: [&str; 2] = ["price", "close"];

/// A chronological series of prices, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Reads prices from a CSV file with a header row.
    ///
    /// The price column is the first one named `price` or `close` (ignoring
    /// case), falling back to the first column. Any cell that is not a number
    /// fails the whole read.
    #[instrument(level = "info", skip(path))]
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, StockCalcError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading prices from CSV");
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let column = PRICE_COLUMNS
            .iter()
            .find_map(|name| {
                headers
                    .iter()
                    .position(|header| header.trim().eq_ignore_ascii_case(name))
            })
            .unwrap_or(0);
        debug!(column, "Using price column");

        let mut prices = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cell = record.get(column).unwrap_or_default();
            prices.push(parse_price(cell, row + 1)?);
        }
        info!(count = prices.len(), "Loaded prices");
        Ok(Self(prices))
    }
}

fn parse_price(token: &str, position: usize) -> Result<f64, StockCalcError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| StockCalcError::MalformedInput {
            token: token.to_string(),
            position,
        })
}

impl FromStr for PriceSeries {
    type Err = StockCalcError;

    /// Parses comma-separated prices such as `"100, 105.5,110"`. Whitespace
    /// around each price is ignored; an empty entry is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .enumerate()
            .map(|(i, token)| parse_price(token, i + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(prices: Vec<f64>) -> Self {
        Self(prices)
    }
}

impl fmt::Display for PriceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}
