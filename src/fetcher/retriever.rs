//! Snippet retrieval for a keyword

use tracing::info;

use super::selectors::SnippetSelectors;
use super::{FetchError, PageFetcher};
use crate::config::SnippetConfig;
use crate::utils::build_search_url;

/// Turns a keyword into a featured snippet using any [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct SnippetRetriever<F> {
    fetcher: F,
    search_url: String,
    selectors: SnippetSelectors,
}

impl<F: PageFetcher> SnippetRetriever<F> {
    #[must_use]
    pub fn new(fetcher: F, config: &SnippetConfig) -> Self {
        Self {
            fetcher,
            search_url: config.search_url().to_string(),
            selectors: SnippetSelectors::from_config(config),
        }
    }

    #[must_use]
    pub fn selectors(&self) -> &SnippetSelectors {
        &self.selectors
    }

    /// Fetch the search page for `keyword` and read the snippet
    ///
    /// `Ok(None)` means the page was read but no selector produced text.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` when the page could not be loaded at all.
    pub async fn retrieve(&self, keyword: &str) -> Result<Option<String>, FetchError> {
        let url = build_search_url(&self.search_url, keyword)?;
        info!("Retrieving featured snippet for '{}'", keyword);

        let snippet = self.fetcher.fetch_text(&url, &self.selectors).await?;
        match &snippet {
            Some(text) => info!("Featured snippet found ({} chars)", text.len()),
            None => info!("No featured snippet matched either selector"),
        }
        Ok(snippet)
    }
}
