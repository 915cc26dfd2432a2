//! Per-ticker CSV persistence.

use std::path::{Path, PathBuf};

use nasdaq_api::types::TradesTable;
use serde_json::Value;

use crate::error::TickerError;

pub const CSV_EXTENSION: &str = "csv";

/// File name used for a ticker's series.
pub fn csv_file_name(ticker: &str) -> String {
    format!("{}.{}", ticker, CSV_EXTENSION)
}

/// Writes `<dir>/<TICKER>.csv`: header labels first, then rows oldest-first.
///
/// `dir` must already exist; this never creates directories. A row missing a
/// column's key gets an empty field for that column. On an I/O failure the
/// partially written file is left in place.
pub fn write_series(
    table: &TradesTable,
    dir: &Path,
    ticker: &str,
) -> Result<PathBuf, TickerError> {
    if !dir.is_dir() {
        tracing::error!("The specified directory '{}' does not exist", dir.display());
        return Err(TickerError::Directory(dir.to_path_buf()));
    }

    let path = dir.join(csv_file_name(ticker));
    let mut wtr = csv::Writer::from_path(&path).map_err(csv_error)?;
    wtr.write_record(table.labels()).map_err(csv_error)?;
    // The API delivers newest first.
    for row in table.rows.iter().rev() {
        wtr.write_record(table.columns.iter().map(|c| cell_text(row.get(&c.key))))
            .map_err(csv_error)?;
    }
    wtr.flush().map_err(|e| TickerError::Io(e.to_string()))?;

    tracing::debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(path)
}

/// Text written for one cell. Strings verbatim, absent or `null` as empty,
/// anything else as its JSON text.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn csv_error(e: csv::Error) -> TickerError {
    if e.is_io_error() {
        TickerError::Io(e.to_string())
    } else {
        TickerError::Unknown(e.to_string())
    }
}
