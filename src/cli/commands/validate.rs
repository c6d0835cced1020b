//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stockcast_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("File not found; checking built-in defaults and environment overrides.");
    }

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("History lookback: {} days", config.generator.lookback_days);
    println!("Volatility: {}%", config.generator.volatility_pct);
    println!("Trend bias: {}%", config.forecast.trend_bias_pct);
    println!("Default horizon: {}", config.session.default_horizon);
    println!(
        "Simulated latency: {}",
        if config.latency.enabled { "enabled" } else { "disabled" }
    );
    match config.session.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }

    Ok(())
}
