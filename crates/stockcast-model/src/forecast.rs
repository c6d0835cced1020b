//! Trend-biased random-walk forecasting.
//!
//! Each forecast close moves from the previous one by a fixed drift in the
//! direction of the historical trend plus bounded noise. The walk continues
//! from its own output, so only the first step touches the historical data.

use rand::{Rng, RngCore};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockcast_core::error::ForecastError;
use stockcast_core::traits::Forecaster;
use stockcast_core::types::calendar::trading_days_after;
use stockcast_core::types::{DailyBar, PredictedBar, Trend};
use tracing::debug;

use crate::trend::TrendEstimator;

/// Configuration for the random-walk forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Daily drift in percent applied in the trend's direction
    pub trend_bias_pct: f64,
    /// Width of the close noise band in percent (`±half` around the drift)
    pub close_noise_pct: f64,
    /// Width of the open noise band in percent
    pub open_noise_pct: f64,
    /// Maximum wick beyond the body in percent
    pub wick_pct: f64,
    /// Bars inspected by the trend estimator
    pub trend_window: usize,
    /// Percent move that counts as a trend
    pub trend_threshold_pct: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trend_bias_pct: 0.6,
            close_noise_pct: 2.0,
            open_noise_pct: 1.0,
            wick_pct: 1.0,
            trend_window: 5,
            trend_threshold_pct: 1.0,
        }
    }
}

impl ForecastConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let percents = [
            ("trend_bias_pct", self.trend_bias_pct),
            ("close_noise_pct", self.close_noise_pct),
            ("open_noise_pct", self.open_noise_pct),
            ("wick_pct", self.wick_pct),
            ("trend_threshold_pct", self.trend_threshold_pct),
        ];
        for (name, value) in percents {
            if !(0.0..50.0).contains(&value) {
                return Err(ForecastError::InvalidConfig(format!(
                    "forecast.{} must be in [0, 50), got {}",
                    name, value
                )));
            }
        }
        if self.trend_window < 2 {
            return Err(ForecastError::InvalidConfig(
                "forecast.trend_window must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

/// Random-walk forecaster biased by the recent trend.
#[derive(Debug, Clone)]
pub struct RandomWalkForecaster {
    config: ForecastConfig,
    estimator: TrendEstimator,
}

impl RandomWalkForecaster {
    /// Create a forecaster from a configuration.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        config.validate()?;
        let threshold = Decimal::try_from(config.trend_threshold_pct)
            .map_err(|e| ForecastError::InvalidConfig(e.to_string()))?;
        let estimator = TrendEstimator::new(config.trend_window, threshold);
        Ok(Self { config, estimator })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Generate `days` predicted bars following `history`.
    ///
    /// Dates start on the first weekday after the last historical date; an
    /// empty history or a zero horizon yields an empty forecast.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        history: &[DailyBar],
        days: usize,
        rng: &mut R,
    ) -> Vec<PredictedBar> {
        let Some(last) = history.last() else {
            return Vec::new();
        };

        let trend = self.estimator.estimate(history);
        let drift = trend.bias() * self.config.trend_bias_pct / 100.0;
        let close_noise = self.config.close_noise_pct / 100.0;
        let open_noise = self.config.open_noise_pct / 100.0;
        let wick = self.config.wick_pct / 100.0;

        let mut last_close = last.close.to_f64().unwrap_or_default();
        let mut predictions = Vec::with_capacity(days);

        for date in trading_days_after(last.date).take(days) {
            let random_factor: f64 = rng.gen_range(-0.5..0.5);
            let predicted_close = last_close * (1.0 + drift + random_factor * close_noise);
            let predicted_open = last_close * (1.0 + rng.gen_range(-0.5..0.5) * open_noise);

            let predicted_high = predicted_open.max(predicted_close) * (1.0 + rng.gen::<f64>() * wick);
            let predicted_low = predicted_open.min(predicted_close) * (1.0 - rng.gen::<f64>() * wick);

            predictions.push(PredictedBar::from_raw(
                date,
                predicted_open,
                predicted_high,
                predicted_low,
                predicted_close,
            ));

            // Random-walk continuation from the unrounded close
            last_close = predicted_close;
        }

        debug!(
            %trend,
            days,
            from = %last.date,
            "generated forecast"
        );

        predictions
    }
}

impl Default for RandomWalkForecaster {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            estimator: TrendEstimator::default(),
        }
    }
}

impl Forecaster for RandomWalkForecaster {
    fn name(&self) -> &str {
        "Random Walk"
    }

    fn trend(&self, history: &[DailyBar]) -> Trend {
        self.estimator.estimate(history)
    }

    fn forecast(&self, history: &[DailyBar], days: usize, rng: &mut dyn RngCore) -> Vec<PredictedBar> {
        self.generate(history, days, rng)
    }
}

/// Forecast `days` trading days for `symbol` with the default parameters.
pub fn generate_forecast<R: Rng + ?Sized>(
    symbol: &str,
    days: usize,
    history: &[DailyBar],
    rng: &mut R,
) -> Vec<PredictedBar> {
    debug!(symbol, days, history = history.len(), "forecast requested");
    RandomWalkForecaster::default().generate(history, days, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rust_decimal_macros::dec;
    use stockcast_core::types::calendar::is_trading_day;
    use stockcast_data::{generate_history, GeneratorConfig};

    fn history_with_closes(closes: &[Decimal]) -> Vec<DailyBar> {
        // Monday 2024-01-08 through Friday 2024-01-12
        let start = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = start + chrono::Days::new(i as u64);
                DailyBar::new(date, close, close + dec!(1), close - dec!(1), close, 1_000_000)
            })
            .collect()
    }

    fn to_f64(value: Decimal) -> f64 {
        value.to_f64().unwrap()
    }

    /// Close-to-close ratios, starting from the last historical close.
    fn step_ratios(history: &[DailyBar], bars: &[PredictedBar]) -> Vec<f64> {
        let mut prev = to_f64(history.last().unwrap().close);
        bars.iter()
            .map(|bar| {
                let close = to_f64(bar.predicted_close);
                let ratio = close / prev;
                prev = close;
                ratio
            })
            .collect()
    }

    #[test]
    fn test_empty_history_yields_empty_forecast() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for days in [0, 1, 7, 30] {
            assert!(generate_forecast("AAPL", days, &[], &mut rng).is_empty());
        }
    }

    #[test]
    fn test_zero_horizon() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let history = history_with_closes(&[dec!(100); 5]);
        assert!(generate_forecast("AAPL", 0, &history, &mut rng).is_empty());
    }

    #[test]
    fn test_length_and_dates() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let history = history_with_closes(&[dec!(100); 5]);
        let last_date = history.last().unwrap().date;

        let bars = generate_forecast("AAPL", 12, &history, &mut rng);

        assert_eq!(bars.len(), 12);
        // Friday 2024-01-12 -> Monday 2024-01-15
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(bars.iter().all(|b| b.date > last_date && is_trading_day(b.date)));
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_high_low_envelope() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let history = history_with_closes(&[dec!(250); 5]);
            for bar in generate_forecast("TSLA", 30, &history, &mut rng) {
                assert!(bar.is_well_formed(), "malformed prediction {:?}", bar);
                assert!(bar.predicted_low > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_neutral_steps_stay_in_noise_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let history = history_with_closes(&[dec!(100); 5]);
        let bars = generate_forecast("X", 20, &history, &mut rng);

        for ratio in step_ratios(&history, &bars) {
            assert!(ratio > 0.9897 && ratio < 1.0103, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_up_trend_biases_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let history = history_with_closes(&[dec!(100), dec!(100.5), dec!(101), dec!(101.5), dec!(102)]);
        let bars = generate_forecast("X", 20, &history, &mut rng);

        for ratio in step_ratios(&history, &bars) {
            assert!(ratio > 0.9957 && ratio < 1.0163, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_down_trend_biases_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let history = history_with_closes(&[dec!(100), dec!(99.5), dec!(99), dec!(98.5), dec!(98)]);
        let bars = generate_forecast("X", 20, &history, &mut rng);

        for ratio in step_ratios(&history, &bars) {
            assert!(ratio > 0.9837 && ratio < 1.0043, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_open_tracks_previous_close() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let history = history_with_closes(&[dec!(200); 5]);
        let bars = generate_forecast("X", 10, &history, &mut rng);

        let mut prev_close = 200.0;
        for bar in &bars {
            let open = to_f64(bar.predicted_open);
            assert!((open / prev_close - 1.0).abs() < 0.0051, "open {} vs {}", open, prev_close);
            prev_close = to_f64(bar.predicted_close);
        }
    }

    #[test]
    fn test_seed_reproduces_forecast() {
        let history = history_with_closes(&[dec!(140); 5]);
        let a = generate_forecast("GOOGL", 7, &history, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate_forecast("GOOGL", 7, &history, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_end_to_end_with_generated_history() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let end = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let history = generate_history("AAPL", end, &GeneratorConfig::default(), &mut rng);
        assert!((21..=23).contains(&history.len()));

        let bars = generate_forecast("AAPL", 7, &history, &mut rng);
        assert_eq!(bars.len(), 7);

        let expected_first = trading_days_after(history.last().unwrap().date).next().unwrap();
        assert_eq!(bars[0].date, expected_first);
    }

    #[test]
    fn test_trait_object() {
        let forecaster: Box<dyn Forecaster> = Box::new(RandomWalkForecaster::default());
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let history = history_with_closes(&[dec!(100), dec!(100), dec!(100), dec!(100), dec!(105)]);

        assert_eq!(forecaster.name(), "Random Walk");
        assert_eq!(forecaster.trend(&history), Trend::Up);
        assert_eq!(forecaster.forecast(&history, 4, &mut rng).len(), 4);
    }

    #[test]
    fn test_config_validation() {
        assert!(ForecastConfig::default().validate().is_ok());
        assert!(RandomWalkForecaster::new(ForecastConfig::default()).is_ok());

        let negative = ForecastConfig {
            close_noise_pct: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            RandomWalkForecaster::new(negative),
            Err(ForecastError::InvalidConfig(_))
        ));

        let tiny_window = ForecastConfig {
            trend_window: 1,
            ..Default::default()
        };
        assert!(tiny_window.validate().is_err());
    }

    #[test]
    fn test_config_drives_trend_window() {
        let config = ForecastConfig {
            trend_window: 3,
            trend_threshold_pct: 0.5,
            ..Default::default()
        };
        let forecaster = RandomWalkForecaster::new(config).unwrap();
        // Only the last three closes count: 100 -> 101 is a 1% move
        let history = history_with_closes(&[dec!(120), dec!(110), dec!(100), dec!(100.5), dec!(101)]);
        assert_eq!(forecaster.trend(&history), Trend::Up);
        assert_eq!(estimate(&history), Trend::Down);
    }

    fn estimate(history: &[DailyBar]) -> Trend {
        crate::estimate_trend(history)
    }
}
