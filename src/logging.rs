use chrono::Local;
use std::path::Path;
use tracing::{info, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Sets up tracing with INFO+ to the console and DEBUG+ from this crate to a
/// timestamped file in `log_dir`.
///
/// The returned guard must be held for as long as file logging is needed;
/// dropping it flushes and stops the background writer.
pub fn setup_tracing(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();

    let file_appender = tracing_appender::rolling::never(log_dir, format!("{}.log", timestamp));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Console layer: INFO and above for all logs, on stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_level(true)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(EnvFilter::from_default_env().add_directive("INFO".parse()?));

    // File layer: DEBUG and above only for this crate
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_filter(EnvFilter::from_default_env().add_directive("stockcalc=DEBUG".parse()?));

    let subscriber = Registry::default().with(console_layer).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    info!(log_dir = %log_dir.display(), "Tracing initialized");

    Ok(guard)
}

/// Console-only subscriber for the work done before the log directory is
/// known, such as reading the configuration file.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync + 'static {
    fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::new("INFO"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_subscriber_sees_config_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
            crate::config::StockCalcConfig::read_config(Some(&path))
        })
        .unwrap();
        assert_eq!(config, crate::config::StockCalcConfig::default());
        assert!(path.exists());
    }
}
