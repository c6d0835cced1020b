//! Short-term trend estimation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockcast_core::types::{DailyBar, Trend};

/// Classifies the percentage move across the last few closes.
#[derive(Debug, Clone)]
pub struct TrendEstimator {
    window: usize,
    threshold_pct: Decimal,
}

impl TrendEstimator {
    /// Create a new estimator.
    ///
    /// `window` bars are inspected; a move strictly beyond `threshold_pct`
    /// percent in either direction is a trend.
    pub fn new(window: usize, threshold_pct: Decimal) -> Self {
        assert!(window >= 2, "Window must span at least two bars");
        Self {
            window,
            threshold_pct: threshold_pct.abs(),
        }
    }

    /// Number of bars inspected.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Classify the tail of `bars`.
    ///
    /// Returns `Neutral` when fewer than `window` bars are available or the
    /// first close of the window is zero.
    pub fn estimate(&self, bars: &[DailyBar]) -> Trend {
        if bars.len() < self.window {
            return Trend::Neutral;
        }

        let recent = &bars[bars.len() - self.window..];
        let first_close = recent[0].close;
        let last_close = recent[recent.len() - 1].close;

        let Some(ratio) = (last_close - first_close).checked_div(first_close) else {
            return Trend::Neutral;
        };
        let percent_change = ratio * dec!(100);

        if percent_change > self.threshold_pct {
            Trend::Up
        } else if percent_change < -self.threshold_pct {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

impl Default for TrendEstimator {
    fn default() -> Self {
        Self::new(5, dec!(1))
    }
}

/// Trend of the last five closes with a one percent threshold.
pub fn estimate_trend(bars: &[DailyBar]) -> Trend {
    TrendEstimator::default().estimate(bars)
}
