//! Core types and traits for the stock forecast generator.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (DailyBar, PredictedBar)
//! - Trend classification and forecast horizons
//! - A weekday trading calendar and simulated latency
//! - Core traits for market data sources and forecasters

pub mod types;
pub mod traits;
pub mod error;

pub use error::{StockcastError, StockcastResult};
pub use types::*;
pub use traits::*;
