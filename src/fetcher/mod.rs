//! Page fetching for featured-snippet retrieval
//!
//! One capability, [`PageFetcher`], with two realizations:
//! - [`RenderedFetch`] drives headless Chromium and reads the DOM after
//!   scripts have run.
//! - [`RawFetch`] issues a single HTTP GET and parses the markup as served.
//!
//! [`Fetcher`] picks between them from [`FetchStrategy`] configuration.

mod errors;
mod page_timeout;
mod raw;
mod rendered;
mod retriever;
mod selectors;
mod session;

pub use errors::FetchError;
pub use page_timeout::with_page_timeout;
pub use raw::RawFetch;
pub use rendered::RenderedFetch;
pub use retriever::SnippetRetriever;
pub use selectors::{SnippetSelectors, extract_snippet};
pub use session::{BrowserSession, LaunchOptions};

use std::future::Future;
use url::Url;

use crate::config::{FetchStrategy, SnippetConfig};

/// Get the text of a snippet element from a web page
pub trait PageFetcher {
    /// Load `url` and return the text matched by `selectors`
    ///
    /// `Ok(None)` when the page loaded but neither selector produced text;
    /// `Err` when the page itself could not be loaded.
    fn fetch_text(
        &self,
        url: &Url,
        selectors: &SnippetSelectors,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send;
}

/// The fetcher selected by configuration
#[derive(Debug, Clone)]
pub enum Fetcher {
    Rendered(RenderedFetch),
    Raw(RawFetch),
}

impl Fetcher {
    /// # Errors
    ///
    /// Returns an error if the raw HTTP client cannot be built.
    pub fn from_config(config: &SnippetConfig) -> Result<Self, FetchError> {
        Ok(match config.fetch_strategy() {
            FetchStrategy::Rendered => Fetcher::Rendered(RenderedFetch::from_config(config)),
            FetchStrategy::Raw => Fetcher::Raw(RawFetch::from_config(config)?),
        })
    }

    #[must_use]
    pub fn strategy(&self) -> FetchStrategy {
        match self {
            Fetcher::Rendered(_) => FetchStrategy::Rendered,
            Fetcher::Raw(_) => FetchStrategy::Raw,
        }
    }
}

impl PageFetcher for Fetcher {
    async fn fetch_text(
        &self,
        url: &Url,
        selectors: &SnippetSelectors,
    ) -> Result<Option<String>, FetchError> {
        match self {
            Fetcher::Rendered(fetcher) => fetcher.fetch_text(url, selectors).await,
            Fetcher::Raw(fetcher) => fetcher.fetch_text(url, selectors).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_selects_variant() {
        let raw = SnippetConfig::builder()
            .fetch_strategy(FetchStrategy::Raw)
            .build()
            .unwrap();
        assert_eq!(Fetcher::from_config(&raw).unwrap().strategy(), FetchStrategy::Raw);

        let rendered = SnippetConfig::builder().build().unwrap();
        assert!(matches!(
            Fetcher::from_config(&rendered).unwrap(),
            Fetcher::Rendered(_)
        ));
    }
}
