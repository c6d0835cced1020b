//! CLI command implementations.

pub mod history;
pub mod init;
pub mod predict;
pub mod symbols;
pub mod validate;

use chrono::NaiveDate;
use std::sync::Arc;
use stockcast_config::AppConfig;
use stockcast_core::traits::MarketDataSource;
use stockcast_data::MockMarketData;

/// Build the synthetic data source described by the configuration.
pub(crate) fn mock_source(
    config: &AppConfig,
    seed: Option<u64>,
    as_of: Option<NaiveDate>,
) -> Arc<dyn MarketDataSource> {
    let mut source = match seed {
        Some(seed) => MockMarketData::seeded(config.generator.clone(), seed),
        None => MockMarketData::new(config.generator.clone()),
    }
    .with_latency(config.latency.to_latency());
    if let Some(date) = as_of {
        source = source.with_as_of(date);
    }
    Arc::new(source)
}
