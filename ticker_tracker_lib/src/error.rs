//! Per-ticker error type and the result codes reported for each ticker.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single ticker produced no CSV file.
///
/// Every failure in the fetch and write stages for one ticker ends up here;
/// nothing escapes the per-ticker boundary.
#[derive(Error, Debug)]
pub enum TickerError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(String),
    #[error("Failed to parse response as JSON: {0}")]
    JsonParsing(String),
    #[error("Missing field in response: {0}")]
    MissingFields(String),
    #[error("Failed to write file: {0}")]
    Io(String),
    #[error("The specified directory '{}' does not exist", .0.display())]
    Directory(PathBuf),
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl TickerError {
    pub fn code(&self) -> ResultCode {
        match self {
            Self::HttpRequest(_) => ResultCode::ErrorHttpRequest,
            Self::JsonParsing(_) => ResultCode::ErrorJsonParsing,
            Self::MissingFields(_) => ResultCode::ErrorMissingFields,
            Self::Io(_) => ResultCode::ErrorIo,
            Self::Directory(_) => ResultCode::ErrorDirectory,
            Self::Unknown(_) => ResultCode::ErrorUnknown,
        }
    }
}

impl From<nasdaq_api::Error> for TickerError {
    fn from(e: nasdaq_api::Error) -> Self {
        use nasdaq_api::Error as ApiError;
        match e {
            ApiError::RequestFailed(msg) => Self::HttpRequest(msg),
            ApiError::HttpStatus { status, .. } => Self::HttpRequest(format!("status {}", status)),
            ApiError::Parse(msg) => Self::JsonParsing(msg),
            ApiError::MissingField(field) => Self::MissingFields(field.to_string()),
            ApiError::Setup(msg) => Self::Unknown(msg),
        }
    }
}

/// Result code printed next to each ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    ErrorHttpRequest,
    ErrorJsonParsing,
    ErrorMissingFields,
    ErrorIo,
    ErrorDirectory,
    ErrorUnknown,
}

impl ResultCode {
    pub fn of<T>(outcome: &Result<T, TickerError>) -> Self {
        match outcome {
            Ok(_) => ResultCode::Success,
            Err(e) => e.code(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::Success => "SUCCESS",
            ResultCode::ErrorHttpRequest => "ERROR_HTTP_REQUEST",
            ResultCode::ErrorJsonParsing => "ERROR_JSON_PARSING",
            ResultCode::ErrorMissingFields => "ERROR_MISSING_FIELDS",
            ResultCode::ErrorIo => "ERROR_IO",
            ResultCode::ErrorDirectory => "ERROR_DIRECTORY",
            ResultCode::ErrorUnknown => "ERROR_UNKNOWN",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
