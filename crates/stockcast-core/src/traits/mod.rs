//! Core traits for the forecast generator.

mod forecaster;
mod market_data;

pub use forecaster::Forecaster;
pub use market_data::MarketDataSource;
