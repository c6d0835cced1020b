//! Prediction report generation.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use stockcast_core::types::{DailyBar, PredictedBar, Trend};
use uuid::Uuid;

use crate::StockSummary;

/// One row of the day-by-day prediction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    pub date: NaiveDate,
    pub open: Decimal,
    pub close: Decimal,
    /// Close minus the previous row's close (zero on the first row)
    pub close_change: Decimal,
    /// `close_change` as a percentage of the previous close
    pub close_change_pct: Decimal,
    /// Open minus the previous row's open (zero on the first row)
    pub open_change: Decimal,
    /// `open_change` as a percentage of the previous open
    pub open_change_pct: Decimal,
}

impl PredictionRow {
    /// Direction of the close-to-close move.
    pub fn direction(&self) -> Trend {
        if self.close_change_pct > Decimal::ZERO {
            Trend::Up
        } else if self.close_change_pct < Decimal::ZERO {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

fn percent_of(change: Decimal, base: Decimal) -> Decimal {
    change
        .checked_div(base)
        .map(|ratio| (ratio * dec!(100)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

/// Day-over-day changes for a forecast.
pub fn prediction_rows(bars: &[PredictedBar]) -> Vec<PredictionRow> {
    let mut prev: Option<&PredictedBar> = None;
    bars.iter()
        .map(|bar| {
            let (close_change, close_change_pct, open_change, open_change_pct) = match prev {
                Some(p) => {
                    let close_change = bar.predicted_close - p.predicted_close;
                    let open_change = bar.predicted_open - p.predicted_open;
                    (
                        close_change,
                        percent_of(close_change, p.predicted_close),
                        open_change,
                        percent_of(open_change, p.predicted_open),
                    )
                }
                None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            };
            prev = Some(bar);

            PredictionRow {
                date: bar.date,
                open: bar.predicted_open,
                close: bar.predicted_close,
                close_change,
                close_change_pct,
                open_change,
                open_change_pct,
            }
        })
        .collect()
}

/// Complete prediction report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Report identifier
    pub id: Uuid,
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
    /// Market data source name
    pub source: String,
    /// Forecaster name
    pub forecaster: String,
    /// Headline figures
    pub summary: StockSummary,
    /// Trend the forecast was biased by
    pub trend: Option<Trend>,
    /// Historical bars the forecast extends
    pub history: Vec<DailyBar>,
    /// Raw predicted bars
    pub predictions: Vec<PredictedBar>,
    /// Day-by-day table
    pub rows: Vec<PredictionRow>,
}

impl PredictionReport {
    /// Assemble a report.
    pub fn new(
        source: impl Into<String>,
        forecaster: impl Into<String>,
        summary: StockSummary,
        trend: Option<Trend>,
        history: Vec<DailyBar>,
        predictions: Vec<PredictedBar>,
    ) -> Self {
        let rows = prediction_rows(&predictions);
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.into(),
            forecaster: forecaster.into(),
            summary,
            trend,
            history,
            predictions,
            rows,
        }
    }

    /// Generate a text summary.
    pub fn summary_text(&self) -> String {
        let mut s = String::new();
        let summary = &self.summary;

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                   PRICE PREDICTION REPORT                  \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("{} Summary\n", summary.symbol));
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Company:             {}\n", summary.name));
        s.push_str(&format!("  Current Price:       {}\n", money(summary.current_price)));
        s.push_str(&format!("  Predicted High:      {}\n", money(summary.predicted_highest)));
        s.push_str(&format!("  Predicted Low:       {}\n", money(summary.predicted_lowest)));
        s.push_str(&format!("  Prediction Horizon:  {}\n", summary.horizon));
        if let Some(pct) = summary.price_change_pct() {
            let arrow = if pct >= Decimal::ZERO { "▲" } else { "▼" };
            s.push_str(&format!("  Predicted Change:    {} {:.2}%\n", arrow, pct.abs()));
        }
        match summary.accuracy {
            Some(accuracy) => s.push_str(&format!("  Model Accuracy:      {:.2}%\n", accuracy)),
            None => s.push_str("  Model Accuracy:      N/A\n"),
        }
        if let Some(trend) = self.trend {
            s.push_str(&format!("  Recent Trend:        {}\n", trend));
        }
        s.push('\n');

        s.push_str("HISTORY\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) => {
                s.push_str(&format!(
                    "  {} trading days, {} to {}\n",
                    self.history.len(),
                    first.date,
                    last.date
                ));
                s.push_str(&format!("  Last Close:          ${:.2}\n", last.close));
            }
            _ => s.push_str("  No historical data loaded.\n"),
        }
        s.push('\n');

        s.push_str("PRICE PREDICTIONS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        if self.rows.is_empty() {
            s.push_str("  No prediction data available.\n");
        } else {
            s.push_str("  Date          Open        Close       Change\n");
            for row in &self.rows {
                let arrow = match row.direction() {
                    Trend::Up => "▲",
                    Trend::Down => "▼",
                    Trend::Neutral => " ",
                };
                s.push_str(&format!(
                    "  {}    ${:<10.2} ${:<10.2} {} {:.2}%\n",
                    row.date,
                    row.open,
                    row.close,
                    arrow,
                    row.close_change_pct.abs()
                ));
            }
        }
        s.push('\n');

        s.push_str(&format!("  Source: {}    Forecaster: {}\n", self.source, self.forecaster));
        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn money(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "N/A".to_string(),
    }
}
