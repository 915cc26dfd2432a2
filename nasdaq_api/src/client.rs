//! HTTP client for the NASDAQ quote API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{HistoricalQuery, Query},
    types::{HistoricalData, Response, TradesTable},
    user_agent::{get_user_agent, ACCEPT},
    Error,
};

/// Requests are abandoned after this long. The API is either quick or down.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the NASDAQ quote API.
///
/// Sends requests with browser-like headers; the API refuses clients that
/// do not identify as a browser. Each request builds a fresh
/// `reqwest::Client` with a 5-second timeout and is attempted exactly once.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.nasdaq.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.nasdaq.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Full request URL for a path and optional query.
    pub fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Setup(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Setup(e.to_string())
            })?;
        tracing::debug!("GET {}", url);
        let resp = client
            .get(url.clone())
            .header("accept", ACCEPT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to {}: {}", url, e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Bad status {} from {}: {}", status, url, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response from {}: {} | body: {}", url, e, snippet);
            Error::Parse(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Path of the historical endpoint for a symbol.
    pub fn historical_path(ticker: &str) -> String {
        format!("/api/quote/{}/historical", ticker)
    }

    /// Fetches the raw historical response for a ticker.
    pub async fn get_historical_raw(
        &self,
        ticker: &str,
        query: &HistoricalQuery,
    ) -> Result<Response<HistoricalData>, Error> {
        self.get::<Response<HistoricalData>, HistoricalQuery>(
            Self::historical_path(ticker).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches the historical trades table for a ticker, failing with
    /// [`Error::MissingField`] when the table, its headers or its rows are
    /// absent or empty.
    pub async fn get_historical(
        &self,
        ticker: &str,
        query: &HistoricalQuery,
    ) -> Result<TradesTable, Error> {
        let table = self
            .get_historical_raw(ticker, query)
            .await?
            .into_trades_table()
            .inspect_err(|e| tracing::error!("{} for {}", e, ticker))?;
        Ok(table)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
