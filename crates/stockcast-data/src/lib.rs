//! Synthetic and file-backed market data.

mod csv_source;
mod export;
mod generator;
mod mock;
pub mod symbols;

pub use csv_source::CsvDataSource;
pub use export::{write_forecast_csv, write_forecast_csv_to_path, write_history_csv, write_history_csv_to_path};
pub use generator::{generate_history, GeneratorConfig};
pub use mock::MockMarketData;
pub use symbols::StockInfo;
