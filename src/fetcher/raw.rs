//! Markup-only fetch over plain HTTP
//!
//! Lightweight and fast, but sees only the HTML the server sends. Pages that
//! build the snippet with JavaScript come back as a selector miss.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::selectors::{SnippetSelectors, extract_snippet};
use super::{FetchError, PageFetcher};
use crate::config::SnippetConfig;

#[derive(Debug, Clone)]
pub struct RawFetch {
    client: Client,
}

impl RawFetch {
    /// Build a fetcher whose requests are bounded by `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend
    /// initialization failure).
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// See [`RawFetch::new`].
    pub fn from_config(config: &SnippetConfig) -> Result<Self, FetchError> {
        Self::new(config.fetch_timeout(), config.user_agent())
    }
}

impl PageFetcher for RawFetch {
    async fn fetch_text(
        &self,
        url: &Url,
        selectors: &SnippetSelectors,
    ) -> Result<Option<String>, FetchError> {
        info!("Requesting search page: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes of markup", body.len());

        Ok(extract_snippet(&body, selectors))
    }
}
