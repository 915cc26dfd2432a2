//! The run orchestrator: per-ticker fetch and write, then the combine.

use std::path::PathBuf;

use nasdaq_api::Client;

use crate::combine::{combine, CombineError, CombineReport};
use crate::error::{ResultCode, TickerError};
use crate::fetch::fetch_and_write;
use crate::run_dir::{create_run_dir, list_entries, RunDirError};
use crate::tickers::normalize_ticker;
use crate::window::RunStamp;

/// What a run needs besides the clock and the HTTP client.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    pub output_root: PathBuf,
    pub tickers: Vec<String>,
}

#[derive(Debug)]
pub struct TickerReport {
    pub ticker: String,
    pub outcome: Result<PathBuf, TickerError>,
}

impl TickerReport {
    pub fn code(&self) -> ResultCode {
        ResultCode::of(&self.outcome)
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub run_dir: PathBuf,
    pub tickers: Vec<TickerReport>,
    pub combine: Result<CombineReport, CombineError>,
}

/// Runs the whole pipeline for `stamp`.
///
/// Tickers are processed one at a time in configured order and `on_ticker`
/// is called as each finishes. Per-ticker and combine failures are part of
/// the returned report; only failing to create the run directory is an error.
pub async fn run<F>(
    config: &TrackerConfig,
    client: &Client,
    stamp: &RunStamp,
    mut on_ticker: F,
) -> Result<RunReport, RunDirError>
where
    F: FnMut(&TickerReport),
{
    let run_dir = create_run_dir(&config.output_root, &stamp.dir_name())?;
    let window = stamp.window();
    tracing::info!(
        "Fetching {} tickers from {} to {} into {}",
        config.tickers.len(),
        window.start,
        window.end,
        run_dir.display()
    );

    let mut reports = Vec::with_capacity(config.tickers.len());
    for ticker in config.tickers.iter().map(|t| normalize_ticker(t)) {
        let outcome = fetch_and_write(client, &ticker, &window, &run_dir).await;
        let report = TickerReport { ticker, outcome };
        on_ticker(&report);
        reports.push(report);
    }

    let output = run_dir.join(stamp.workbook_name());
    // Every entry is a candidate, not only the files written above.
    let combine = list_entries(&run_dir)
        .map_err(CombineError::from)
        .and_then(|files| combine(&run_dir, &files, &output));

    Ok(RunReport {
        run_dir,
        tickers: reports,
        combine,
    })
}
