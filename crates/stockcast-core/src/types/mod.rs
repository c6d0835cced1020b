//! Core data types for the forecast generator.

mod bar;
pub mod calendar;
mod horizon;
mod latency;
mod trend;

pub use bar::{round_price, DailyBar, PredictedBar};
pub use horizon::Horizon;
pub use latency::SimulatedLatency;
pub use trend::Trend;
