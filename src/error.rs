#[derive(Debug, thiserror::Error)]
pub enum StockCalcError {
    #[error("Initial investment cannot be zero.")]
    ZeroInitialInvestment,
    #[error(
        "Not enough data points for the selected period. Got {prices} prices for a period of {period}."
    )]
    InsufficientHistory { prices: usize, period: usize },
    #[error("At least two prices are needed to calculate a return. Got {0}.")]
    NoReturns(usize),
    #[error(
        "Please enter valid numerical prices separated by commas. Could not parse `{token}` at position {position}."
    )]
    MalformedInput { token: String, position: usize },
    #[error("Period must be at least 1.")]
    InvalidPeriod,
    #[error("{field} must be a finite amount of at least 0, got {value}.")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("Years must be between 1 and {max}, got {years}.")]
    InvalidYears { years: u32, max: u32 },
    #[error("Calculation of {0} did not produce a finite number.")]
    NonFiniteResult(String),
    #[error("Failed to render chart: {0}")]
    ChartError(String),
    #[error("Configuration Error: {0}")]
    ConfigError(String),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde YAML Error: {0}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
}

impl StockCalcError {
    /// Whether the error was caused by the values a user entered, as opposed to
    /// a failure inside the application.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StockCalcError::ZeroInitialInvestment
                | StockCalcError::InsufficientHistory { .. }
                | StockCalcError::MalformedInput { .. }
                | StockCalcError::NoReturns(_)
                | StockCalcError::InvalidPeriod
                | StockCalcError::InvalidAmount { .. }
                | StockCalcError::InvalidYears { .. }
                | StockCalcError::NonFiniteResult(_)
        )
    }
}
