use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_yaml::from_reader;
use tracing::{debug, info, instrument};

use crate::error::StockCalcError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StockCalcConfig {
    #[serde(rename = "log-dir")]
    pub log_dir: PathBuf,
    #[serde(rename = "chart-dir")]
    pub chart_dir: PathBuf,
    #[serde(rename = "chart-width")]
    pub chart_width: u32,
    #[serde(rename = "chart-height")]
    pub chart_height: u32,
    #[serde(rename = "server-host")]
    pub server_host: String,
    #[serde(rename = "server-port")]
    pub server_port: u16,
}

const DEFAULT_DATA: &str = r#"
log-dir: "logs"
chart-dir: "charts"
chart-width: 1000
chart-height: 500
server-host: "127.0.0.1"
server-port: 8080
"#;

impl Default for StockCalcConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            chart_dir: PathBuf::from("charts"),
            chart_width: 1000,
            chart_height: 500,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
        }
    }
}

impl StockCalcConfig {
    /// Reads the configuration from a YAML file.
    ///
    /// If the file does not exist, it creates a default configuration file.
    ///
    /// # Arguments
    ///
    /// * `filename` - Optional path to the configuration file. Defaults to `config.yml`.
    ///
    /// # Returns
    ///
    /// A `Result` containing the validated `StockCalcConfig` on success or an error on failure.
    #[instrument(level = "info", skip(filename))]
    pub fn read_config<P: AsRef<Path>>(filename: Option<P>) -> Result<Self, StockCalcError> {
        let path = filename
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(|| Path::new("config.yml").to_path_buf());

        info!(path = %path.display(), "Reading configuration");

        if !path.exists() {
            info!(
                "Config file does not exist. Creating default config at {}",
                path.display()
            );
            let mut file = File::create(&path)?;
            file.write_all(DEFAULT_DATA.as_bytes())?;
            debug!("Default configuration file created");
            return Ok(StockCalcConfig::default());
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let config: Self = from_reader(reader)?;
        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StockCalcError> {
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(StockCalcError::ConfigError(format!(
                "Chart dimensions must be non-zero, got {}x{}",
                self.chart_width, self.chart_height
            )));
        }
        if self.server_host.trim().is_empty() {
            return Err(StockCalcError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of a chart file inside the chart directory.
    pub fn chart_path(&self, name: &str) -> PathBuf {
        self.chart_dir.join(format!("{}.svg", name))
    }
}
