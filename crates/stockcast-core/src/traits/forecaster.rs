//! Forecaster trait definitions.

use crate::types::{DailyBar, PredictedBar, Trend};
use rand::RngCore;

/// Core forecaster trait.
///
/// A forecaster extends a daily history forward by a number of trading days.
/// Randomness comes from the caller so that a fixed seed reproduces a
/// forecast exactly.
pub trait Forecaster: Send + Sync {
    /// Get the unique name of this forecaster.
    fn name(&self) -> &str;

    /// Classify the recent direction of a history.
    fn trend(&self, history: &[DailyBar]) -> Trend;

    /// Forecast `days` trading days past the end of `history`.
    ///
    /// # Returns
    /// Exactly `days` bars dated on the trading days following the last
    /// historical date, or an empty vector when `history` is empty
    fn forecast(&self, history: &[DailyBar], days: usize, rng: &mut dyn RngCore) -> Vec<PredictedBar>;
}
