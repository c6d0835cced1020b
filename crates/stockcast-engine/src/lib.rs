//! Prediction session orchestration and reporting.

mod report;
mod session;
mod summary;

pub use report::{prediction_rows, PredictionReport, PredictionRow};
pub use session::{Outcome, PredictionSession, SelectedStock, SessionState};
pub use summary::StockSummary;
