//! Stock history and forecast generator CLI.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use stockcast_config::load_config;
use stockcast_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(&cli.config);

    // Setup logging; flags win over the configuration file
    let (config_level, config_json, log_file) = match &loaded {
        Ok(config) => (
            config.logging.level.clone(),
            config.logging.is_json(),
            config.logging.file.clone(),
        ),
        Err(_) => ("info".to_string(), false, None),
    };
    let log_level = cli
        .log_level
        .as_ref()
        .map(|level| level.as_str().to_string())
        .unwrap_or(config_level);
    let _guard = setup_logging(
        &log_level,
        cli.json_logs || config_json,
        log_file.as_deref().map(Path::new),
    );

    // Execute command
    match cli.command {
        Commands::Predict(args) => cli::commands::predict::run(args, loaded?).await,
        Commands::History(args) => cli::commands::history::run(args, loaded?).await,
        Commands::Symbols(args) => cli::commands::symbols::run(args).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
        Commands::InitConfig(args) => cli::commands::init::run(args).await,
    }
}
