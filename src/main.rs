// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{handle_init_command, handle_list_config_command, handle_run_command};
use ice_scraper::config::Config;
use ice_scraper::error::AppError;
use logging::setup_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let config_path = args.config.as_deref();

    // --init must work before any config file exists
    if args.init {
        return handle_init_command(config_path).await;
    }

    if args.list_config {
        return handle_list_config_command(config_path).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load(config_path).await;

    let config_log_path = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_file_path.clone());
    let (log_file_path, _guard) = setup_logging(&args, config_log_path.as_deref()).await?;
    info!("Logs are being written to: {log_file_path}");

    let config = config.inspect_err(|e| error!("Failed to load configuration: {e}"))?;

    let result = handle_run_command(&args, &config).await;
    if let Err(e) = &result {
        error!("Run failed: {e}");
    }
    result
}
