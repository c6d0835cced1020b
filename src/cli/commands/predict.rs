//! Predict command implementation.

use anyhow::{Context, Result};
use std::sync::Arc;
use stockcast_config::AppConfig;
use stockcast_core::traits::MarketDataSource;
use stockcast_data::{write_forecast_csv_to_path, CsvDataSource};
use stockcast_engine::{Outcome, PredictionSession};
use stockcast_model::RandomWalkForecaster;
use tracing::{info, warn};

use super::mock_source;
use crate::cli::PredictArgs;

pub async fn run(args: PredictArgs, config: AppConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let seed = args.seed.or(config.session.seed);
    let horizon = args.days.unwrap_or(config.session.default_horizon);
    info!("Forecasting {} for {}", args.symbol, horizon);

    // Load data
    let source: Arc<dyn MarketDataSource> = match &args.data {
        Some(data_path) => {
            let path = data_path
                .to_str()
                .context("Data path is not valid UTF-8")?;
            Arc::new(CsvDataSource::new(path).context("Failed to open data file")?)
        }
        None => mock_source(&config, seed, args.as_of),
    };

    let forecaster = RandomWalkForecaster::new(config.forecast.clone())
        .context("Failed to create forecaster")?;

    let mut session = PredictionSession::new(source, Arc::new(forecaster))
        .with_latency(config.latency.to_latency())
        .with_horizon(horizon);
    if let Some(seed) = seed {
        // Offset so the forecast does not replay the history's draws
        session = session.with_seed(seed.wrapping_add(1));
    }

    // Run the session
    if session.select_stock(&args.symbol).await? == Outcome::Stale {
        warn!("Stock selection was superseded");
    }
    session.predict().await?;
    let report = session.report().await?;

    // Output results
    match args.output.as_str() {
        "json" => {
            let json = report.to_json()?;
            println!("{}", json);
        }
        _ => {
            println!("{}", report.summary_text());
        }
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        write_forecast_csv_to_path(save_path, &report.predictions)?;
        info!("Forecast saved to {:?}", save_path);
    }

    Ok(())
}
