//! Fetch-and-persist for a single ticker.

use std::path::{Path, PathBuf};

use nasdaq_api::types::TradesTable;
use nasdaq_api::{Client, HistoricalQuery};

use crate::error::TickerError;
use crate::window::DateWindow;
use crate::writer::write_series;

/// Requests the ticker's trades table for `window`. One attempt, no retries.
pub async fn fetch_series(
    client: &Client,
    ticker: &str,
    window: &DateWindow,
) -> Result<TradesTable, TickerError> {
    let query = HistoricalQuery::new(window.start, window.end);
    let table = client.get_historical(ticker, &query).await?;
    Ok(table)
}

/// Fetches the ticker's series and writes it to `<dir>/<TICKER>.csv`.
///
/// Every failure is returned as a [`TickerError`]; nothing is written when
/// the fetch fails.
pub async fn fetch_and_write(
    client: &Client,
    ticker: &str,
    window: &DateWindow,
    dir: &Path,
) -> Result<PathBuf, TickerError> {
    let table = fetch_series(client, ticker, window).await?;
    write_series(&table, dir, ticker)
}
