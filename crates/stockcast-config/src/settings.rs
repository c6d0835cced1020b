//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stockcast_core::types::{Horizon, SimulatedLatency};
use stockcast_core::{StockcastError, StockcastResult};
use stockcast_data::GeneratorConfig;
use stockcast_model::ForecastConfig;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub latency: LatencySettings,
    #[serde(default)]
    pub session: SessionSettings,
}

impl AppConfig {
    /// Validate every section.
    pub fn validate(&self) -> StockcastResult<()> {
        self.logging.validate()?;
        self.generator.validate()?;
        self.forecast.validate()?;
        self.latency.validate()?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> StockcastResult<String> {
        toml::to_string_pretty(self).map_err(|e| StockcastError::Serialization(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stockcast".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Whether events should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    fn validate(&self) -> StockcastResult<()> {
        if self.level.trim().is_empty() {
            return Err(StockcastError::Config("logging.level must not be empty".into()));
        }
        if !matches!(self.format.to_lowercase().as_str(), "pretty" | "json") {
            return Err(StockcastError::Config(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.format
            )));
        }
        Ok(())
    }
}

/// Artificial response delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencySettings {
    pub enabled: bool,
    pub historical_ms: u64,
    pub current_price_ms: u64,
    pub forecast_ms: u64,
    pub accuracy_ms: u64,
}

/// Upper bound for any single delay.
const MAX_DELAY_MS: u64 = 60_000;

impl Default for LatencySettings {
    fn default() -> Self {
        let realistic = SimulatedLatency::realistic();
        Self {
            enabled: false,
            historical_ms: realistic.historical.as_millis() as u64,
            current_price_ms: realistic.current_price.as_millis() as u64,
            forecast_ms: realistic.forecast.as_millis() as u64,
            accuracy_ms: realistic.accuracy.as_millis() as u64,
        }
    }
}

impl LatencySettings {
    /// The configured delays, or none when disabled.
    pub fn to_latency(&self) -> SimulatedLatency {
        if !self.enabled {
            return SimulatedLatency::none();
        }
        SimulatedLatency {
            historical: Duration::from_millis(self.historical_ms),
            current_price: Duration::from_millis(self.current_price_ms),
            forecast: Duration::from_millis(self.forecast_ms),
            accuracy: Duration::from_millis(self.accuracy_ms),
        }
    }

    fn validate(&self) -> StockcastResult<()> {
        let delays = [
            ("historical_ms", self.historical_ms),
            ("current_price_ms", self.current_price_ms),
            ("forecast_ms", self.forecast_ms),
            ("accuracy_ms", self.accuracy_ms),
        ];
        for (name, ms) in delays {
            if ms > MAX_DELAY_MS {
                return Err(StockcastError::Config(format!(
                    "latency.{} must not exceed {} ms, got {}",
                    name, MAX_DELAY_MS, ms
                )));
            }
        }
        Ok(())
    }
}

/// Prediction session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Horizon used until another is requested
    pub default_horizon: Horizon,
    /// Fixed seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session.default_horizon, Horizon::DEFAULT);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_invalid_sections() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".into();
        assert!(matches!(config.validate(), Err(StockcastError::Config(_))));

        let mut config = AppConfig::default();
        config.forecast.trend_window = 1;
        assert!(matches!(config.validate(), Err(StockcastError::Forecast(_))));

        let mut config = AppConfig::default();
        config.generator.lookback_days = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.latency.forecast_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_latency_toggle() {
        let mut latency = LatencySettings::default();
        assert_eq!(latency.to_latency(), SimulatedLatency::none());

        latency.enabled = true;
        assert_eq!(latency.to_latency(), SimulatedLatency::realistic());
    }

    #[test]
    fn test_to_toml() {
        let toml = AppConfig::default().to_toml().unwrap();
        assert!(toml.contains("[generator]"));
        assert!(toml.contains("default_horizon = 7"));
        assert!(!toml.contains("seed"));
    }
}
