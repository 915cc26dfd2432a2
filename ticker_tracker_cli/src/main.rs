mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ticker_tracker_lib::{pipeline, tickers, Client, RunStamp, TrackerConfig};

#[derive(Parser, Debug)]
#[command(name = "ticker-tracker")]
#[command(about = "Snapshot recent daily trading history for a list of tickers into one workbook")]
struct Cli {
    /// Directory that holds one timestamped folder per run
    #[arg(long, env = "TICKER_TRACKER_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// YAML ticker list to use instead of the built-in one
    #[arg(long, env = "TICKER_TRACKER_TICKERS")]
    tickers: Option<PathBuf>,

    /// Quote API base URL
    #[arg(long, env = "TICKER_TRACKER_BASE_URL", default_value = "https://api.nasdaq.com")]
    base_url: String,
}

impl Cli {
    fn tracker_config(&self) -> Result<TrackerConfig> {
        let tickers = match &self.tickers {
            Some(path) => tickers::load_tickers_from_path(path)
                .with_context(|| format!("Failed to load tickers from {}", path.display()))?,
            None => tickers::load_default_tickers().context("Failed to load built-in tickers")?,
        };
        Ok(TrackerConfig {
            output_root: self.output_dir.clone(),
            tickers,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticker_tracker=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.tracker_config()?;
    let client = Client::with_base_url(&cli.base_url);
    let stamp = RunStamp::now();

    let report = pipeline::run(&config, &client, &stamp, output::print_ticker)
        .await
        .context("Failed to prepare run directory")?;
    output::print_combine(&report.combine);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_arguments() {
        let cli = Cli::try_parse_from(["ticker-tracker"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert_eq!(cli.base_url, "https://api.nasdaq.com");
        assert!(cli.tickers.is_none());

        let config = cli.tracker_config().unwrap();
        assert_eq!(config.output_root, PathBuf::from("output"));
        assert!(!config.tickers.is_empty());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "ticker-tracker",
            "--output-dir",
            "/tmp/runs",
            "--base-url",
            "http://localhost:9000",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/runs"));
        assert_eq!(cli.base_url, "http://localhost:9000");
    }

    #[test]
    fn missing_ticker_file_is_an_error() {
        let cli = Cli::try_parse_from(["ticker-tracker", "--tickers", "/definitely/not/here.yml"])
            .unwrap();
        let err = cli.tracker_config().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yml"));
    }
}
