//! Fetching a rendered card preview.
//!
//! The preview fetch is deliberately dumb: one blocking GET, no retries.
//! Any transport error or non-2xx status surfaces as
//! [`FetchError::NetworkFailure`] for the caller to display; issuing a
//! fresh request is the user's decision, not this module's.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use thiserror::Error;
use tracing::debug;

const AGENT: &str = "cardforge/0.1";

/// Errors fetching a rendered preview.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or non-2xx response. Not retried.
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

/// Blocking preview client.
#[derive(Debug, Clone)]
pub struct PreviewClient {
    client: Client,
}

impl PreviewClient {
    /// Create a client with a sane request timeout.
    ///
    /// # Errors
    ///
    /// [`FetchError::NetworkFailure`] if the underlying client cannot be
    /// constructed (TLS backend initialization).
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch the rendered SVG for a compiled card URL.
    ///
    /// `host` is the card service origin (`https://cards.example`); `url`
    /// is the compiled `/{card}?{query}` path.
    ///
    /// # Errors
    ///
    /// [`FetchError::NetworkFailure`] on transport errors or any non-2xx
    /// status. The error is surfaced once and never retried here.
    pub fn fetch(&self, host: &str, url: &str) -> Result<String, FetchError> {
        let full = format!("{host}{url}");
        debug!(url = full, "fetching card preview");
        let response = self
            .client
            .get(&full)
            .header(USER_AGENT, AGENT)
            .send()
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NetworkFailure(format!(
                "{full} returned {status}"
            )));
        }
        response
            .text()
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_a_network_failure() {
        let client = PreviewClient::new().unwrap();
        let err = client
            .fetch("http://127.0.0.1:9", "/jokes-card?theme=techy")
            .unwrap_err();
        assert!(matches!(err, FetchError::NetworkFailure(_)));
    }
}
