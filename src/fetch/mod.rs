//! HTTP fetch layer.
//!
//! A thin wrapper around `reqwest` that sends a browser-like User-Agent,
//! applies a per-call timeout, and reports non-2xx statuses as data rather
//! than errors. Only transport-level failures (DNS, connect, timeout, bad
//! URL) surface as [`FetchError`].

use std::time::Duration;
use thiserror::Error;

/// User-Agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0";

/// A completed HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Whether the response carries the canonical success status.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Transport-level fetch failure. Non-2xx statuses are not errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client with a shared connection pool and fixed default headers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a client. Timeouts are applied per request, not here.
    pub fn new() -> Self {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { inner }
    }

    /// GET a URL with the given timeout, returning status and body.
    ///
    /// Redirects are followed by the underlying client. A non-2xx status is
    /// returned as a normal [`FetchResponse`]; only transport failures error.
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let resp = self.inner.get(url).timeout(timeout).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(FetchResponse { status, body })
    }

    /// GET a URL, returning only the status code (body discarded).
    pub async fn get_status(&self, url: &str, timeout: Duration) -> Result<u16, FetchError> {
        let resp = self.inner.get(url).timeout(timeout).send().await?;
        Ok(resp.status().as_u16())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_only_for_200() {
        let ok = FetchResponse {
            status: 200,
            body: String::new(),
        };
        let redirect = FetchResponse {
            status: 301,
            body: String::new(),
        };
        let missing = FetchResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_ok());
        assert!(!redirect.is_ok());
        assert!(!missing.is_ok());
    }
}
