//! CSV data source.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use stockcast_core::error::DataError;
use stockcast_core::traits::MarketDataSource;
use stockcast_core::types::DailyBar;
use tracing::{debug, warn};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", default)]
    volume: f64,
}

/// CSV data source for user-supplied daily history.
///
/// The file holds one series; the symbol passed to [`MarketDataSource`]
/// calls is only used for logging.
pub struct CsvDataSource {
    path: String,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load all bars from the CSV file, oldest first.
    pub fn load_all(&self) -> Result<Vec<DailyBar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for (index, result) in reader.deserialize().enumerate() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            // Header is line 1
            let line = index + 2;

            let date = parse_date(&record.date)?;
            let volume = if record.volume.is_finite() && record.volume > 0.0 {
                record.volume.round() as u64
            } else {
                0
            };

            let bar = DailyBar::from_raw(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                volume,
            );
            if !bar.is_well_formed() {
                return Err(DataError::ParseError(format!(
                    "line {}: prices must be positive with low <= open, close <= high",
                    line
                )));
            }
            bars.push(bar);
        }

        if !bars.windows(2).all(|w| w[0].date <= w[1].date) {
            warn!(path = %self.path, "rows out of order, sorting by date");
            bars.sort_by_key(|b| b.date);
        }
        if let Some(w) = bars.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DataError::ParseError(format!("duplicate date {}", w[0].date)));
        }

        debug!(path = %self.path, bars = bars.len(), "loaded CSV history");
        Ok(bars)
    }
}

#[async_trait]
impl MarketDataSource for CsvDataSource {
    async fn historical_bars(&self, symbol: &str) -> Result<Vec<DailyBar>, DataError> {
        debug!(symbol, path = %self.path, "reading history from CSV");
        self.load_all()
    }

    async fn current_price(&self, _symbol: &str) -> Result<Decimal, DataError> {
        self.load_all()?
            .last()
            .map(|bar| bar.close)
            .ok_or(DataError::NoDataAvailable)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse various date formats into a calendar date.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.date_naive());
    }

    // Try parsing as Unix timestamp
    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds if > 10 digits
        let millis = if ts > 10_000_000_000 { ts } else { ts * 1000 };
        if let Some(dt) = DateTime::from_timestamp_millis(millis) {
            return Ok(dt.date_naive());
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
