//! HTTP fetcher implementation
//!
//! One GET per call, no retries. The result type distinguishes a successful
//! body from a non-success status and from transport failures, so callers
//! never conflate "empty but reachable page" with "fetch failed".

use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Decoded page body (invalid byte sequences replaced, never fails)
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, decode failure, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body for a successful fetch, `None` otherwise
    pub fn into_body(self) -> Option<String> {
        match self {
            FetchResult::Success { body } => Some(body),
            _ => None,
        }
    }
}

/// Builds the HTTP client shared by the whole crawl
///
/// The original opened a fresh session per request; a single pooled client
/// keeps observable behavior identical while avoiding the per-request
/// connection setup.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("climat-harvest/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its decoded body
///
/// `Response::text()` decodes with replacement characters for invalid
/// sequences, so a malformed body still yields text rather than an error.
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("GET {} -> HTTP {}", url, status.as_u16());
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { body },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            tracing::debug!("GET {} failed: {}", url, e);
            FetchResult::NetworkError {
                error: e.to_string(),
            }
        }
    }
}
