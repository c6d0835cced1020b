//! Market data source trait definitions.

use crate::error::DataError;
use crate::types::DailyBar;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for sources of daily history and spot prices.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the daily history for a symbol.
    ///
    /// # Returns
    /// Trading-day bars ordered from oldest to newest
    async fn historical_bars(&self, symbol: &str) -> Result<Vec<DailyBar>, DataError>;

    /// Get the latest price for a symbol.
    async fn current_price(&self, symbol: &str) -> Result<Decimal, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    struct FixedSource {
        bars: Vec<DailyBar>,
    }

    #[async_trait]
    impl MarketDataSource for FixedSource {
        async fn historical_bars(&self, _symbol: &str) -> Result<Vec<DailyBar>, DataError> {
            Ok(self.bars.clone())
        }

        async fn current_price(&self, _symbol: &str) -> Result<Decimal, DataError> {
            self.bars
                .last()
                .map(|bar| bar.close)
                .ok_or(DataError::NoDataAvailable)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_source_object_safety() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let source: Box<dyn MarketDataSource> = Box::new(FixedSource {
            bars: vec![DailyBar::new(date, dec!(10), dec!(11), dec!(9), dec!(10.5), 100)],
        });

        assert_eq!(source.historical_bars("X").await.unwrap().len(), 1);
        assert_eq!(source.current_price("X").await.unwrap(), dec!(10.5));
        assert_eq!(source.name(), "fixed");

        let empty = FixedSource { bars: vec![] };
        assert!(matches!(
            empty.current_price("X").await,
            Err(DataError::NoDataAvailable)
        ));
    }
}
