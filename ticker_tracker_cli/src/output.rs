//! Console report: one line per ticker, then the combine result.

use ticker_tracker_lib::{CombineError, CombineReport, TickerReport};

/// `TICKER - CODE`, ticker padded to four columns.
pub fn ticker_line(report: &TickerReport) -> String {
    format!("{:<4} - {}", report.ticker, report.code())
}

pub fn print_ticker(report: &TickerReport) {
    if let Err(e) = &report.outcome {
        tracing::debug!("{}: {}", report.ticker, e);
    }
    println!("{}", ticker_line(report));
}

pub fn combine_message(result: &Result<CombineReport, CombineError>) -> String {
    match result {
        Ok(report) => format!("Success!: {}", report.output.display()),
        Err(CombineError::NoValidFiles { .. }) => {
            "No valid CSV files were processed. Exiting...".to_string()
        }
        Err(e) => format!("Error: {}", e),
    }
}

pub fn print_combine(result: &Result<CombineReport, CombineError>) {
    match result {
        Ok(_) => println!("{}", combine_message(result)),
        Err(_) => eprintln!("{}", combine_message(result)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ticker_tracker_lib::TickerError;

    fn report(ticker: &str, outcome: Result<PathBuf, TickerError>) -> TickerReport {
        TickerReport {
            ticker: ticker.to_string(),
            outcome,
        }
    }

    #[test]
    fn ticker_line_pads_short_symbols() {
        let r = report("GE", Ok(PathBuf::from("GE.csv")));
        assert_eq!(ticker_line(&r), "GE   - SUCCESS");
    }

    #[test]
    fn ticker_line_shows_error_code() {
        let r = report(
            "ZZZZINVALID",
            Err(TickerError::HttpRequest("status 400".into())),
        );
        assert_eq!(ticker_line(&r), "ZZZZINVALID - ERROR_HTTP_REQUEST");
    }

    #[test]
    fn combine_messages() {
        let ok = Ok(CombineReport {
            output: PathBuf::from("output/20241018-163000/2024-10-18-combined.xlsx"),
            sheets: vec!["AAPL".into()],
            skipped: vec![],
        });
        assert_eq!(
            combine_message(&ok),
            "Success!: output/20241018-163000/2024-10-18-combined.xlsx"
        );

        let none = Err(CombineError::NoValidFiles { skipped: vec![] });
        assert_eq!(
            combine_message(&none),
            "No valid CSV files were processed. Exiting..."
        );

        let denied = Err(CombineError::PermissionDenied(PathBuf::from("/locked/out.xlsx")));
        assert_eq!(
            combine_message(&denied),
            "Error: Permission denied when trying to write to /locked/out.xlsx"
        );
    }
}
