use std::error::Error;

use clap::Parser;
use stockcalc::{
    args::Args,
    commands::run,
    config::StockCalcConfig,
    logging::{bootstrap_subscriber, setup_tracing},
};

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        StockCalcConfig::read_config(args.config.as_ref())
    })?;
    let guard = setup_tracing(&config.log_dir)?;

    match run(&args.command, &config, &mut std::io::stdout()) {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e);
            drop(guard);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
