//! Mock market data service.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use stockcast_core::error::DataError;
use stockcast_core::traits::MarketDataSource;
use stockcast_core::types::{round_price, DailyBar, SimulatedLatency};
use tokio::sync::Mutex;
use tracing::debug;

use crate::generator::{generate_history, GeneratorConfig};

/// Current-price jitter as a fraction of the base price (`±0.5%`).
const PRICE_JITTER: f64 = 0.01;

/// Market data source that fabricates prices instead of fetching them.
///
/// Every call draws from one seedable random source, so a fixed seed replays
/// the same sequence of responses.
pub struct MockMarketData {
    config: GeneratorConfig,
    rng: Mutex<ChaCha8Rng>,
    as_of: Option<NaiveDate>,
    latency: SimulatedLatency,
}

impl MockMarketData {
    /// Create a mock source seeded from OS entropy.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Create a mock source with a fixed seed.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: GeneratorConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
            as_of: None,
            latency: SimulatedLatency::none(),
        }
    }

    /// Pin "today" to a fixed date.
    pub fn with_as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// The date the history window ends on.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
    async fn historical_bars(&self, symbol: &str) -> Result<Vec<DailyBar>, DataError> {
        SimulatedLatency::pause(self.latency.historical).await;

        let mut rng = self.rng.lock().await;
        Ok(generate_history(symbol, self.as_of(), &self.config, &mut *rng))
    }

    async fn current_price(&self, symbol: &str) -> Result<Decimal, DataError> {
        SimulatedLatency::pause(self.latency.current_price).await;

        let base = self.config.base_price(symbol);
        let fluctuation = self.rng.lock().await.gen_range(-0.5..0.5) * base * PRICE_JITTER;
        let price = round_price(base + fluctuation);
        debug!(symbol, %price, "sampled current price");
        Ok(price)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
