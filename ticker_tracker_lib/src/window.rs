//! Run timestamp and the trailing date window derived from it.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Length of the trailing window fetched on every run.
pub const LOOKBACK_WEEKS: i64 = 5;

/// Inclusive date range requested from the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The window ending on `end` and starting [`LOOKBACK_WEEKS`] earlier.
    pub fn ending_on(end: NaiveDate) -> Self {
        Self {
            start: end - Duration::weeks(LOOKBACK_WEEKS),
            end,
        }
    }
}

/// The moment a run started. Every name and date used by the run is derived
/// from this single value.
#[derive(Clone, Copy, Debug)]
pub struct RunStamp {
    started_at: NaiveDateTime,
}

impl RunStamp {
    /// Local wall-clock time, matching what the user sees in the directory name.
    pub fn now() -> Self {
        Self {
            started_at: Local::now().naive_local(),
        }
    }

    pub fn at(started_at: NaiveDateTime) -> Self {
        Self { started_at }
    }

    /// `YYYYMMDD-HHMMSS`
    pub fn dir_name(&self) -> String {
        self.started_at.format("%Y%m%d-%H%M%S").to_string()
    }

    /// `YYYY-MM-DD-combined.xlsx`
    pub fn workbook_name(&self) -> String {
        format!("{}-combined.xlsx", self.started_at.format("%Y-%m-%d"))
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::ending_on(self.started_at.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> RunStamp {
        let dt = NaiveDate::from_ymd_opt(2024, 10, 18)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        RunStamp::at(dt)
    }

    #[test]
    fn dir_name_has_second_precision() {
        assert_eq!(stamp().dir_name(), "20241018-090507");
    }

    #[test]
    fn workbook_name_uses_run_date() {
        assert_eq!(stamp().workbook_name(), "2024-10-18-combined.xlsx");
    }

    #[test]
    fn window_spans_five_weeks() {
        let window = stamp().window();
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 10, 18).unwrap());
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 9, 13).unwrap());
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window = DateWindow::ending_on(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 12, 6).unwrap());
    }
}
