//! Error types for the forecast generator.
//!
//! The generators themselves are total and never fail. These types cover the
//! surrounding surfaces: configuration, file-backed data and user input.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum StockcastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

/// Forecasting and session errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid horizon: {requested} days (allowed {min}..={max})")]
    InvalidHorizon { requested: i64, min: usize, max: usize },

    #[error("Select a stock with historical data before generating predictions")]
    SelectionRequired,
}

/// Result type alias for forecast operations.
pub type StockcastResult<T> = Result<T, StockcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: StockcastError = DataError::SymbolNotFound("XYZ".to_string()).into();
        assert!(matches!(err, StockcastError::Data(_)));
        assert_eq!(err.to_string(), "Data error: Symbol not found: XYZ");

        let err: StockcastError = ForecastError::SelectionRequired.into();
        assert!(matches!(err, StockcastError::Forecast(_)));
    }

    #[test]
    fn test_invalid_horizon_message() {
        let err = ForecastError::InvalidHorizon {
            requested: 0,
            min: 1,
            max: 30,
        };
        assert_eq!(err.to_string(), "Invalid horizon: 0 days (allowed 1..=30)");
    }
}
