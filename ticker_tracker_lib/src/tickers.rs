//! Ticker list loading.
//!
//! The default list is embedded at compile time from `seed_data/tickers.yml`;
//! a file with the same shape can replace it at run time.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Error types for ticker list operations.
#[derive(Error, Debug)]
pub enum TickerListError {
    #[error("Failed to parse ticker list YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Failed to read ticker list {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Blank ticker symbol at position {0}")]
    BlankSymbol(usize),
}

/// Top-level structure for the ticker list YAML file.
#[derive(Deserialize, Debug)]
pub struct TickerListFile {
    pub tickers: Vec<String>,
}

/// Parse a ticker list from YAML content, preserving order.
///
/// Symbols are returned as written; see [`normalize_ticker`].
pub fn parse_tickers(yaml_content: &str) -> Result<Vec<String>, TickerListError> {
    let file: TickerListFile = serde_yml::from_str(yaml_content)?;
    if let Some(pos) = file.tickers.iter().position(|t| t.trim().is_empty()) {
        return Err(TickerListError::BlankSymbol(pos));
    }
    Ok(file.tickers)
}

/// Load the ticker list embedded at compile time.
pub fn load_default_tickers() -> Result<Vec<String>, TickerListError> {
    let yaml_content = include_str!("../../seed_data/tickers.yml");
    parse_tickers(yaml_content)
}

/// Load a ticker list from a YAML file on disk.
pub fn load_tickers_from_path(path: &Path) -> Result<Vec<String>, TickerListError> {
    let yaml_content = std::fs::read_to_string(path).map_err(|source| TickerListError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_tickers(&yaml_content)
}

/// Canonical form of a symbol: surrounding whitespace removed, uppercase.
pub fn normalize_ticker(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list() {
        let yaml = r#"
tickers:
  - AAPL
  - msft
  - "BRK.B"
"#;
        let result = parse_tickers(yaml).unwrap();
        assert_eq!(result, vec!["AAPL", "msft", "BRK.B"]);
    }

    #[test]
    fn test_empty_list() {
        let result = parse_tickers("tickers: []").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let yaml = r#"
tickers:
  - AAPL
  - "  "
"#;
        let result = parse_tickers(yaml);
        assert!(matches!(result.unwrap_err(), TickerListError::BlankSymbol(1)));
    }

    #[test]
    fn test_missing_key_rejected() {
        let result = parse_tickers("symbols: [AAPL]");
        assert!(matches!(result.unwrap_err(), TickerListError::YamlParse(_)));
    }

    #[test]
    fn test_load_default_tickers_succeeds() {
        let result = load_default_tickers().unwrap();
        assert!(!result.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickers.yml");
        std::fs::write(&path, "tickers:\n  - nvda\n  - amd\n").unwrap();
        assert_eq!(load_tickers_from_path(&path).unwrap(), vec!["nvda", "amd"]);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tickers_from_path(&dir.path().join("absent.yml"));
        assert!(matches!(result.unwrap_err(), TickerListError::Read { .. }));
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker(" aapl "), "AAPL");
        assert_eq!(normalize_ticker("brk.b"), "BRK.B");
    }
}
