//! Synthetic daily history.
//!
//! Produces a randomized OHLCV series that walks from a per-symbol reference
//! price over a fixed lookback window, one bar per weekday.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stockcast_core::error::StockcastError;
use stockcast_core::types::calendar::trading_days_between;
use stockcast_core::types::DailyBar;
use tracing::debug;

use crate::symbols::{self, DEFAULT_BASE_PRICE};

/// Close noise as a fraction of volatility (`close = open ± vol/4`).
const BODY_NOISE: f64 = 0.5;
/// Maximum wick length as a fraction of volatility.
const WICK_NOISE: f64 = 0.3;

/// Configuration for the history generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Calendar days covered, ending on the as-of date
    pub lookback_days: u32,
    /// Daily volatility as a percentage of the base price
    pub volatility_pct: f64,
    /// An open never falls below this fraction of the previous close
    pub floor_ratio: f64,
    /// Smallest volume (inclusive)
    pub volume_min: u64,
    /// Largest volume (exclusive)
    pub volume_max: u64,
    /// Base price for symbols outside the catalog
    pub default_base_price: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            volatility_pct: 2.0,
            floor_ratio: 0.9,
            volume_min: 1_000_000,
            volume_max: 11_000_000,
            default_base_price: DEFAULT_BASE_PRICE,
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), StockcastError> {
        if self.lookback_days == 0 || self.lookback_days > 365 {
            return Err(StockcastError::Config(
                "generator.lookback_days must be between 1 and 365".into(),
            ));
        }
        if !(self.volatility_pct > 0.0 && self.volatility_pct < 50.0) {
            return Err(StockcastError::Config(
                "generator.volatility_pct must be in (0, 50)".into(),
            ));
        }
        if !(self.floor_ratio > 0.0 && self.floor_ratio < 1.0) {
            return Err(StockcastError::Config(
                "generator.floor_ratio must be in (0, 1)".into(),
            ));
        }
        if self.volume_min == 0 || self.volume_min >= self.volume_max {
            return Err(StockcastError::Config(
                "generator.volume_min must be positive and below volume_max".into(),
            ));
        }
        if !(self.default_base_price > 0.0 && self.default_base_price.is_finite()) {
            return Err(StockcastError::Config(
                "generator.default_base_price must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Reference price for a symbol, falling back to the configured default.
    pub fn base_price(&self, symbol: &str) -> f64 {
        symbols::base_price(symbol).unwrap_or(self.default_base_price)
    }
}

/// Generate the daily history of `symbol` for the window ending on `end`.
///
/// Walks every calendar day from `end - lookback_days` through `end`,
/// skipping weekends. Each open perturbs the previous close by up to half the
/// volatility, floored at `floor_ratio` of it; the close carries forward as
/// the next day's starting price. Never fails.
pub fn generate_history<R: Rng + ?Sized>(
    symbol: &str,
    end: NaiveDate,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<DailyBar> {
    let base = config.base_price(symbol);
    let volatility = base * config.volatility_pct / 100.0;
    let start = end
        .checked_sub_days(Days::new(u64::from(config.lookback_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut price = base;
    let mut bars = Vec::with_capacity(config.lookback_days as usize);

    for date in trading_days_between(start, end) {
        let change = rng.gen_range(-0.5..0.5) * volatility;
        price = (price + change).max(price * config.floor_ratio);

        let open = price;
        let close = open + rng.gen_range(-0.5..0.5) * volatility * BODY_NOISE;
        let high = open.max(close) + rng.gen::<f64>() * volatility * WICK_NOISE;
        let low = open.min(close) - rng.gen::<f64>() * volatility * WICK_NOISE;
        let volume = if config.volume_max > config.volume_min {
            rng.gen_range(config.volume_min..config.volume_max)
        } else {
            config.volume_min
        };

        bars.push(DailyBar::from_raw(date, open, high, low, close, volume));

        // Next day starts at previous close
        price = close;
    }

    debug!(
        symbol,
        base,
        bars = bars.len(),
        %start,
        %end,
        "generated synthetic history"
    );

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rust_decimal::Decimal;
    use stockcast_core::types::calendar::{count_trading_days, is_trading_day};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(value: f64) -> Decimal {
        Decimal::try_from(value).unwrap()
    }

    #[test]
    fn test_history_covers_weekdays_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let end = date(2024, 3, 15);
        let bars = generate_history("AAPL", end, &GeneratorConfig::default(), &mut rng);

        let expected = count_trading_days(date(2024, 2, 14), end);
        assert_eq!(bars.len(), expected);
        assert!((21..=23).contains(&bars.len()));

        assert!(bars.iter().all(|b| is_trading_day(b.date)));
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(bars.last().unwrap().date, end);
    }

    #[test]
    fn test_history_ending_on_weekend() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // 2024-03-17 is a Sunday
        let bars = generate_history("MSFT", date(2024, 3, 17), &GeneratorConfig::default(), &mut rng);
        assert_eq!(bars.last().unwrap().date, date(2024, 3, 15));
    }

    #[test]
    fn test_bars_are_well_formed() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let bars = generate_history("NVDA", date(2024, 6, 3), &GeneratorConfig::default(), &mut rng);

            for bar in &bars {
                assert!(bar.is_well_formed(), "malformed bar {:?}", bar);
                assert!((1_000_000..11_000_000).contains(&bar.volume));
            }
        }
    }

    #[test]
    fn test_price_walk_stays_near_previous_close() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = GeneratorConfig::default();
        let bars = generate_history("AAPL", date(2024, 3, 15), &config, &mut rng);

        // volatility = 3.60; an open moves at most half of it from the prior close
        let first = bars[0].open;
        assert!(first >= dec(178.19) && first <= dec(181.81), "first open {}", first);

        for pair in bars.windows(2) {
            let gap = (pair[1].open - pair[0].close).abs();
            assert!(gap <= dec(1.81), "gap {} too large", gap);
        }
        for bar in &bars {
            assert!(bar.open > dec(162.0) && bar.open < dec(198.0));
        }
    }

    #[test]
    fn test_unknown_symbol_uses_default_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bars = generate_history("ZZZZ", date(2024, 3, 15), &GeneratorConfig::default(), &mut rng);

        let first = bars[0].open;
        assert!(first >= dec(98.99) && first <= dec(101.01), "first open {}", first);
    }

    #[test]
    fn test_seed_reproduces_series() {
        let config = GeneratorConfig::default();
        let end = date(2024, 3, 15);

        let a = generate_history("TSLA", end, &config, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_history("TSLA", end, &config, &mut ChaCha8Rng::seed_from_u64(99));
        let c = generate_history("TSLA", end, &config, &mut ChaCha8Rng::seed_from_u64(100));

        assert_eq!(a, b);
        assert_eq!(a.len(), c.len());
        assert_ne!(a, c);
    }

    #[test]
    fn test_config_validation() {
        assert!(GeneratorConfig::default().validate().is_ok());

        let bad_lookback = GeneratorConfig {
            lookback_days: 0,
            ..Default::default()
        };
        assert!(bad_lookback.validate().is_err());

        let bad_volume = GeneratorConfig {
            volume_min: 5,
            volume_max: 5,
            ..Default::default()
        };
        assert!(bad_volume.validate().is_err());

        let bad_floor = GeneratorConfig {
            floor_ratio: 1.5,
            ..Default::default()
        };
        assert!(bad_floor.validate().is_err());
    }
}
