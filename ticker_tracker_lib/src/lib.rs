//! Library layer for Ticker Tracker: ticker lists, run directory layout,
//! per-ticker fetch and CSV persistence, and the workbook combiner.
//!
//! Wraps the `nasdaq_api` crate and turns each ticker's attempt into a
//! contained [`TickerError`] so that one failure never affects the others.

pub mod combine;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod run_dir;
pub mod tickers;
pub mod window;
pub mod writer;

pub use nasdaq_api;
pub use nasdaq_api::types::TradesTable;
pub use nasdaq_api::Client;

pub use combine::{combine, CombineError, CombineReport, Sheet, SkipReason, Skipped};
pub use error::{ResultCode, TickerError};
pub use pipeline::{RunReport, TickerReport, TrackerConfig};
pub use run_dir::RunDirError;
pub use tickers::TickerListError;
pub use window::{DateWindow, RunStamp};
