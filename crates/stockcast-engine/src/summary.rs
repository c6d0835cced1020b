//! Headline figures for a selected stock.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use stockcast_core::types::{Horizon, PredictedBar};

/// Summary of a stock and its latest forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Ticker symbol
    pub symbol: String,
    /// Company name
    pub name: String,
    /// Latest price, once loaded
    pub current_price: Option<Decimal>,
    /// Forecast horizon
    pub horizon: Horizon,
    /// Highest predicted close
    pub predicted_highest: Option<Decimal>,
    /// Lowest predicted close
    pub predicted_lowest: Option<Decimal>,
    /// Accuracy estimate in percent
    pub accuracy: Option<Decimal>,
}

impl StockSummary {
    /// Build a summary from a forecast.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        current_price: Option<Decimal>,
        horizon: Horizon,
        predictions: &[PredictedBar],
        accuracy: Option<Decimal>,
    ) -> Self {
        let closes = predictions.iter().map(|bar| bar.predicted_close);
        Self {
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            horizon,
            predicted_highest: closes.clone().max(),
            predicted_lowest: closes.min(),
            accuracy,
        }
    }

    /// Check if a forecast has been generated.
    pub fn has_prediction(&self) -> bool {
        self.predicted_highest.is_some()
    }

    /// Predicted upside: highest predicted close minus the current price.
    pub fn price_change(&self) -> Option<Decimal> {
        match (self.predicted_highest, self.current_price) {
            (Some(highest), Some(current)) if !current.is_zero() => Some(highest - current),
            _ => None,
        }
    }

    /// [`price_change`](Self::price_change) as a percentage of the current price.
    pub fn price_change_pct(&self) -> Option<Decimal> {
        let change = self.price_change()?;
        let current = self.current_price?;
        let pct = change.checked_div(current)? * dec!(100);
        Some(pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}
