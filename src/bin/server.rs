use std::{error::Error, path::PathBuf};

use stockcalc::{
    config::StockCalcConfig,
    logging::{bootstrap_subscriber, setup_tracing},
    server::run_server,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::var_os("STOCKCALC_CONFIG").map(PathBuf::from);
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        StockCalcConfig::read_config(config_path)
    })?;
    let _guard = setup_tracing(&config.log_dir)?;
    run_server(config).await?;
    Ok(())
}
