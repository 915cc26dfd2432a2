//! Error types for the API client.

/// Errors that can occur when requesting a historical series.
///
/// Variants are ordered the way the client checks for them: transport first,
/// then status, then body shape, then the presence of the trades table.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP client or request URL could not be built.
    #[error("Failed to build request: {0}")]
    Setup(String),
    /// The request never produced a response (network error, timeout, TLS).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not JSON of the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The JSON parsed but a required section was absent or empty.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}
