//! Prediction session.
//!
//! A session tracks one selected stock, its history and current price, and
//! the latest forecast. Selecting a stock and generating a forecast are both
//! asynchronous; a response that arrives after a newer request started is
//! discarded instead of overwriting fresher state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use stockcast_core::error::{DataError, ForecastError};
use stockcast_core::traits::{Forecaster, MarketDataSource};
use stockcast_core::types::{DailyBar, Horizon, PredictedBar, SimulatedLatency, Trend};
use stockcast_core::StockcastResult;
use stockcast_data::symbols;
use stockcast_model::sample_accuracy;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{PredictionReport, StockSummary};

/// Whether a completed request was applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was current and the session state was updated
    Applied,
    /// A newer request started meanwhile; the response was dropped
    Stale,
}

/// The stock a session is focused on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedStock {
    pub symbol: String,
    pub name: String,
}

impl SelectedStock {
    /// Resolve a symbol against the catalog.
    ///
    /// Unknown symbols are accepted and named after themselves.
    pub fn resolve(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return None;
        }

        Some(match symbols::lookup(symbol) {
            Some(info) => Self {
                symbol: info.symbol.to_string(),
                name: info.name.to_string(),
            },
            None => {
                let symbol = symbol.to_uppercase();
                Self {
                    name: symbol.clone(),
                    symbol,
                }
            }
        })
    }
}

/// Snapshot of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub stock: Option<SelectedStock>,
    pub horizon: Horizon,
    pub history: Vec<DailyBar>,
    pub current_price: Option<Decimal>,
    pub trend: Option<Trend>,
    pub predictions: Vec<PredictedBar>,
    pub accuracy: Option<Decimal>,
}

impl SessionState {
    fn clear_forecast(&mut self) {
        self.trend = None;
        self.predictions.clear();
        self.accuracy = None;
    }
}

/// Interactive prediction workflow over a data source and a forecaster.
pub struct PredictionSession {
    source: Arc<dyn MarketDataSource>,
    forecaster: Arc<dyn Forecaster>,
    rng: Mutex<ChaCha8Rng>,
    latency: SimulatedLatency,
    selection_ticket: AtomicU64,
    prediction_ticket: AtomicU64,
    state: Mutex<SessionState>,
}

impl PredictionSession {
    /// Create a session seeded from OS entropy.
    pub fn new(source: Arc<dyn MarketDataSource>, forecaster: Arc<dyn Forecaster>) -> Self {
        Self {
            source,
            forecaster,
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
            latency: SimulatedLatency::none(),
            selection_ticket: AtomicU64::new(0),
            prediction_ticket: AtomicU64::new(0),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Use a fixed seed for forecasts and accuracy estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(ChaCha8Rng::seed_from_u64(seed));
        self
    }

    /// Delay forecast and accuracy responses.
    ///
    /// Only the `forecast` and `accuracy` delays apply here; the data source
    /// carries its own.
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Start with a horizon other than the default.
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.state.get_mut().horizon = horizon;
        self
    }

    /// Select a stock and load its history and current price.
    ///
    /// Any forecast for the previous stock is cleared immediately.
    pub async fn select_stock(&self, symbol: &str) -> StockcastResult<Outcome> {
        let stock = SelectedStock::resolve(symbol)
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))?;
        let ticket = self.selection_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            state.stock = Some(stock.clone());
            state.history.clear();
            state.current_price = None;
            state.clear_forecast();
        }

        let fetched = self.fetch(&stock.symbol).await;

        let mut state = self.state.lock().await;
        if self.selection_ticket.load(Ordering::SeqCst) != ticket {
            debug!(symbol = %stock.symbol, ticket, "Discarding stale stock data");
            return Ok(Outcome::Stale);
        }

        let (history, price) = fetched?;
        info!(
            symbol = %stock.symbol,
            bars = history.len(),
            price = %price,
            "Stock selected"
        );
        state.history = history;
        state.current_price = Some(price);
        Ok(Outcome::Applied)
    }

    async fn fetch(&self, symbol: &str) -> Result<(Vec<DailyBar>, Decimal), DataError> {
        let history = self.source.historical_bars(symbol).await?;
        let price = self.source.current_price(symbol).await?;
        Ok((history, price))
    }

    /// Change the forecast horizon.
    ///
    /// The existing forecast is kept until the next [`predict`](Self::predict).
    pub async fn set_horizon(&self, horizon: Horizon) {
        self.state.lock().await.horizon = horizon;
    }

    /// Current forecast horizon.
    pub async fn horizon(&self) -> Horizon {
        self.state.lock().await.horizon
    }

    /// Generate a forecast for the selected stock.
    pub async fn predict(&self) -> StockcastResult<Outcome> {
        let selection = self.selection_ticket.load(Ordering::SeqCst);
        let ticket = self.prediction_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let (symbol, history, horizon) = {
            let state = self.state.lock().await;
            match &state.stock {
                Some(stock) if !state.history.is_empty() => {
                    (stock.symbol.clone(), state.history.clone(), state.horizon)
                }
                _ => return Err(ForecastError::SelectionRequired.into()),
            }
        };

        SimulatedLatency::pause(self.latency.forecast).await;
        let trend = self.forecaster.trend(&history);
        let predictions = {
            let mut rng = self.rng.lock().await;
            self.forecaster.forecast(&history, horizon.days(), &mut *rng)
        };

        SimulatedLatency::pause(self.latency.accuracy).await;
        let accuracy = {
            let mut rng = self.rng.lock().await;
            sample_accuracy(&mut *rng)
        };

        let mut state = self.state.lock().await;
        if self.selection_ticket.load(Ordering::SeqCst) != selection
            || self.prediction_ticket.load(Ordering::SeqCst) != ticket
        {
            debug!(symbol = %symbol, ticket, "Discarding stale forecast");
            return Ok(Outcome::Stale);
        }

        info!(
            symbol = %symbol,
            days = predictions.len(),
            trend = %trend,
            accuracy = %accuracy,
            forecaster = self.forecaster.name(),
            "Forecast generated"
        );
        state.trend = Some(trend);
        state.predictions = predictions;
        state.accuracy = Some(accuracy);
        Ok(Outcome::Applied)
    }

    /// Snapshot of the session state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Headline figures, once a stock is selected.
    pub async fn summary(&self) -> Option<StockSummary> {
        let state = self.state.lock().await;
        Self::summarize(&state)
    }

    fn summarize(state: &SessionState) -> Option<StockSummary> {
        let stock = state.stock.as_ref()?;
        Some(StockSummary::new(
            stock.symbol.clone(),
            stock.name.clone(),
            state.current_price,
            state.horizon,
            &state.predictions,
            state.accuracy,
        ))
    }

    /// Full report for the selected stock.
    pub async fn report(&self) -> StockcastResult<PredictionReport> {
        let state = self.state.lock().await;
        let summary = Self::summarize(&state).ok_or(ForecastError::SelectionRequired)?;

        let report = PredictionReport::new(
            self.source.name(),
            self.forecaster.name(),
            summary,
            state.trend,
            state.history.clone(),
            state.predictions.clone(),
        );
        debug!(id = %report.id, "Report assembled");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;
    use stockcast_core::StockcastError;
    use stockcast_data::{GeneratorConfig, MockMarketData};
    use stockcast_model::RandomWalkForecaster;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn session_with(source: MockMarketData) -> PredictionSession {
        PredictionSession::new(
            Arc::new(source.with_as_of(as_of())),
            Arc::new(RandomWalkForecaster::default()),
        )
        .with_seed(11)
    }

    fn session() -> PredictionSession {
        session_with(MockMarketData::seeded(GeneratorConfig::default(), 42))
    }

    #[test]
    fn test_resolve_stock() {
        let stock = SelectedStock::resolve("aapl").unwrap();
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple Inc.");

        let stock = SelectedStock::resolve(" xyz ").unwrap();
        assert_eq!(stock.symbol, "XYZ");
        assert_eq!(stock.name, "XYZ");

        assert!(SelectedStock::resolve("  ").is_none());
    }

    #[tokio::test]
    async fn test_select_and_predict() {
        let session = session();
        assert_eq!(session.horizon().await, Horizon::DEFAULT);

        assert_eq!(session.select_stock("AAPL").await.unwrap(), Outcome::Applied);
        let state = session.state().await;
        assert_eq!(state.history.len(), 23);
        assert!(state.current_price.is_some());
        assert!(state.predictions.is_empty());

        session.set_horizon(Horizon::new(10).unwrap()).await;
        assert_eq!(session.predict().await.unwrap(), Outcome::Applied);

        let state = session.state().await;
        assert_eq!(state.predictions.len(), 10);
        assert!(state.predictions[0].date > state.history.last().unwrap().date);
        assert!(state.trend.is_some());
        let accuracy = state.accuracy.unwrap();
        assert!(accuracy >= Decimal::from(70) && accuracy <= Decimal::from(90));

        let summary = session.summary().await.unwrap();
        assert_eq!(summary.symbol, "AAPL");
        assert!(summary.has_prediction());
        assert!(summary.price_change_pct().is_some());
    }

    #[tokio::test]
    async fn test_predict_requires_selection() {
        let session = session();
        let err = session.predict().await.unwrap_err();
        assert!(matches!(
            err,
            StockcastError::Forecast(ForecastError::SelectionRequired)
        ));
        assert!(session.summary().await.is_none());
        assert!(session.report().await.is_err());
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected() {
        let err = session().select_stock("").await.unwrap_err();
        assert!(matches!(err, StockcastError::Data(DataError::SymbolNotFound(_))));
    }

    #[tokio::test]
    async fn test_new_selection_clears_forecast() {
        let session = session();
        session.select_stock("AAPL").await.unwrap();
        session.predict().await.unwrap();
        assert!(!session.state().await.predictions.is_empty());

        session.select_stock("MSFT").await.unwrap();
        let state = session.state().await;
        assert_eq!(state.stock.unwrap().symbol, "MSFT");
        assert!(state.predictions.is_empty());
        assert!(state.accuracy.is_none());
    }

    #[tokio::test]
    async fn test_stale_selection_discarded() {
        let source = MockMarketData::seeded(GeneratorConfig::default(), 42)
            .with_latency(SimulatedLatency::uniform(Duration::from_millis(20)));
        let session = session_with(source);

        let (first, second) = tokio::join!(session.select_stock("AAPL"), session.select_stock("NVDA"));
        assert_eq!(first.unwrap(), Outcome::Stale);
        assert_eq!(second.unwrap(), Outcome::Applied);

        let state = session.state().await;
        assert_eq!(state.stock.unwrap().symbol, "NVDA");
        let price = state.current_price.unwrap();
        assert!(price > Decimal::from(790) && price < Decimal::from(810));
    }

    #[tokio::test]
    async fn test_stale_forecast_discarded() {
        let session = session().with_latency(SimulatedLatency {
            forecast: Duration::from_millis(30),
            ..SimulatedLatency::none()
        });
        session.select_stock("AAPL").await.unwrap();

        let (forecast, selection) = tokio::join!(session.predict(), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            session.select_stock("MSFT").await
        });
        assert_eq!(forecast.unwrap(), Outcome::Stale);
        assert_eq!(selection.unwrap(), Outcome::Applied);

        let state = session.state().await;
        assert_eq!(state.stock.unwrap().symbol, "MSFT");
        assert!(state.predictions.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_sessions_agree() {
        let a = session().with_horizon(Horizon::new(5).unwrap());
        let b = session().with_horizon(Horizon::new(5).unwrap());
        for s in [&a, &b] {
            s.select_stock("TSLA").await.unwrap();
            s.predict().await.unwrap();
        }

        let (a, b) = (a.state().await, b.state().await);
        assert_eq!(a.predictions, b.predictions);
        assert_eq!(a.accuracy, b.accuracy);
    }

    #[tokio::test]
    async fn test_report() {
        let session = session();
        session.select_stock("GOOGL").await.unwrap();
        session.predict().await.unwrap();

        let report = session.report().await.unwrap();
        assert_eq!(report.source, "mock");
        assert_eq!(report.forecaster, "Random Walk");
        assert_eq!(report.rows.len(), 7);
        assert_eq!(report.history.len(), 23);
        assert!(report.summary_text().contains("GOOGL Summary"));
    }
}
