//! Daily price bars, historical and predicted.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round a raw price to cents.
///
/// Prices are generated as `f64` and fixed to two decimals when a bar is
/// built. Non-finite input maps to zero.
pub fn round_price(value: f64) -> Decimal {
    let mut price = Decimal::try_from(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pad whole numbers so they render as "180.00".
    price.rescale(2);
    price
}

/// One trading day's OHLCV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Opening price
    pub open: Decimal,
    /// Highest price
    pub high: Decimal,
    /// Lowest price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Shares traded
    pub volume: u64,
}

impl DailyBar {
    /// Create a new bar from already-rounded prices.
    pub fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a bar from raw prices, rounding each to two decimals.
    pub fn from_raw(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self::new(
            date,
            round_price(open),
            round_price(high),
            round_price(low),
            round_price(close),
            volume,
        )
    }

    /// Check that prices are positive and `low <= min(open, close) <= max(open, close) <= high`.
    pub fn is_well_formed(&self) -> bool {
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        self.low > Decimal::ZERO && self.low <= body_low && body_high <= self.high
    }
}

/// One forecasted day's prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedBar {
    /// Forecast date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    pub predicted_open: Decimal,
    pub predicted_high: Decimal,
    pub predicted_low: Decimal,
    pub predicted_close: Decimal,
}

impl PredictedBar {
    /// Create a predicted bar from raw prices, rounding each to two decimals.
    pub fn from_raw(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            predicted_open: round_price(open),
            predicted_high: round_price(high),
            predicted_low: round_price(low),
            predicted_close: round_price(close),
        }
    }

    /// Check that `low <= min(open, close)` and `max(open, close) <= high`.
    pub fn is_well_formed(&self) -> bool {
        let body_low = self.predicted_open.min(self.predicted_close);
        let body_high = self.predicted_open.max(self.predicted_close);
        self.predicted_low <= body_low && body_high <= self.predicted_high
    }
}
