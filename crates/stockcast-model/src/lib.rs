//! Trend estimation and random-walk forecasting.
//!
//! - [`TrendEstimator`] classifies the last few closes as up, down or neutral
//! - [`RandomWalkForecaster`] extends a history with a trend-biased random walk
//! - [`sample_accuracy`] produces the headline accuracy figure

mod accuracy;
mod forecast;
mod trend;

pub use accuracy::{sample_accuracy, ACCURACY_RANGE};
pub use forecast::{generate_forecast, ForecastConfig, RandomWalkForecaster};
pub use trend::{estimate_trend, TrendEstimator};
