//! CSV export of historical and predicted series.

use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;
use stockcast_core::error::DataError;
use stockcast_core::types::{DailyBar, PredictedBar};

fn write_rows<W: io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), DataError> {
    let mut csv = Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)
            .map_err(|e| DataError::ExportError(e.to_string()))?;
    }
    csv.flush().map_err(|e| DataError::ExportError(e.to_string()))
}

fn create(path: &Path) -> Result<File, DataError> {
    File::create(path).map_err(|e| DataError::ExportError(format!("{}: {}", path.display(), e)))
}

/// Write historical bars as `date,open,high,low,close,volume`.
pub fn write_history_csv<W: io::Write>(writer: W, bars: &[DailyBar]) -> Result<(), DataError> {
    write_rows(writer, bars)
}

/// Write predicted bars as `date,predictedOpen,predictedHigh,predictedLow,predictedClose`.
pub fn write_forecast_csv<W: io::Write>(writer: W, bars: &[PredictedBar]) -> Result<(), DataError> {
    write_rows(writer, bars)
}

/// Write historical bars to a file.
pub fn write_history_csv_to_path(path: &Path, bars: &[DailyBar]) -> Result<(), DataError> {
    write_history_csv(create(path)?, bars)
}

/// Write predicted bars to a file.
pub fn write_forecast_csv_to_path(path: &Path, bars: &[PredictedBar]) -> Result<(), DataError> {
    write_forecast_csv(create(path)?, bars)
}
