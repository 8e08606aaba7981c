//! Script-executing fetch through headless Chromium
//!
//! Each fetch starts its own browser, reads the snippet, and shuts the
//! browser down again. Heavier than [`RawFetch`](super::RawFetch) but sees
//! the DOM after JavaScript has run.

use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use super::page_timeout::with_page_timeout;
use super::selectors::{SnippetSelectors, tidy_rendered_text};
use super::session::{BrowserSession, LaunchOptions};
use super::{FetchError, PageFetcher};
use crate::config::SnippetConfig;

/// How often the DOM is polled while waiting for the primary selector
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct RenderedFetch {
    chrome_executable: Option<PathBuf>,
    headless: bool,
    user_agent: String,
    timeout_secs: u64,
}

impl RenderedFetch {
    #[must_use]
    pub fn from_config(config: &SnippetConfig) -> Self {
        Self {
            chrome_executable: config.chrome_executable().map(PathBuf::from),
            headless: config.headless(),
            user_agent: config.user_agent().to_string(),
            timeout_secs: config.fetch_timeout_secs(),
        }
    }

    fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            chrome_executable: self.chrome_executable.clone(),
            headless: self.headless,
            user_agent: self.user_agent.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl PageFetcher for RenderedFetch {
    async fn fetch_text(
        &self,
        url: &Url,
        selectors: &SnippetSelectors,
    ) -> Result<Option<String>, FetchError> {
        let session = BrowserSession::launch(&self.launch_options()).await?;
        let outcome = read_snippet(&session, url, selectors, self.timeout_secs).await;
        session.close().await;
        outcome
    }
}

async fn read_snippet(
    session: &BrowserSession,
    url: &Url,
    selectors: &SnippetSelectors,
    timeout_secs: u64,
) -> Result<Option<String>, FetchError> {
    let page = session.browser().new_page("about:blank").await?;

    info!("Navigating to search page: {}", url);
    with_page_timeout(
        async {
            page.goto(url.as_str()).await?;
            Ok::<(), FetchError>(())
        },
        timeout_secs,
        "Page navigation",
    )
    .await?;

    let wait = Duration::from_secs(timeout_secs);
    if let Some(text) = wait_for_text(&page, &selectors.primary, wait).await {
        return Ok(Some(text));
    }

    debug!(
        "Primary selector '{}' yielded nothing, trying '{}'",
        selectors.primary, selectors.alternate
    );
    match page.find_element(selectors.alternate.as_str()).await {
        Ok(element) => Ok(element_text(&element).await),
        Err(_) => Ok(None),
    }
}

/// Poll until `css` matches or `timeout` elapses, then read the element text
async fn wait_for_text(page: &Page, css: &str, timeout: Duration) -> Option<String> {
    let start = Instant::now();
    loop {
        if let Ok(element) = page.find_element(css).await {
            debug!("Selector '{}' appeared after {:?}", css, start.elapsed());
            return element_text(&element).await;
        }
        if start.elapsed() >= timeout {
            debug!("Selector '{}' not present after {:?}", css, timeout);
            return None;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn element_text(element: &Element) -> Option<String> {
    let raw = element.inner_text().await.ok().flatten()?;
    let text = tidy_rendered_text(&raw);
    (!text.is_empty()).then_some(text)
}
