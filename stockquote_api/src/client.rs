//! HTTP client for the stock quote service.

use std::time::Duration;

use url::Url;

use crate::{types::QuoteResponse, Error};

/// Base URL of a quote service running on the local machine.
pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the hosted quote service.
pub const HOSTED_BASE_URL: &str = "https://fastapi-publish.onrender.com";

/// Base URL used by [`Client::new`]. Overridable at build time with
/// `STOCKQUOTE_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = match option_env!("STOCKQUOTE_BASE_URL") {
    Some(url) => url,
    None => LOCAL_BASE_URL,
};

/// HTTP client for the quote service's single read endpoint.
///
/// Each request builds a fresh `reqwest::Client`. No timeout is applied
/// unless one is set with [`Client::with_timeout`].
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the service. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            timeout: None,
        }
    }

    /// Sets a total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn quote_url(&self, ticker: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed(format!("invalid base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::RequestFailed(format!(
                    "base URL cannot carry a path: {}",
                    self.base_api_url
                ))
            })?
            .pop_if_empty()
            .push("stock")
            .push(ticker);
        Ok(url)
    }

    /// Fetches the quote for `ticker` from `GET {base}/stock/{ticker}`.
    ///
    /// A `200` body carrying an `error` field is still returned as `Ok`;
    /// callers decide how to present it.
    pub async fn get_quote(&self, ticker: &str) -> Result<QuoteResponse, Error> {
        let url = self.quote_url(ticker)?;
        tracing::debug!("GET {}", url);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        let resp = client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get quote: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet = truncate_body(&body);
            tracing::warn!("Quote request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        serde_json::from_str::<QuoteResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse quote: {} | body: {}", e, truncate_body(&body));
            Error::InvalidResponse(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
    }
}
