//! Setter methods for `SnippetConfigBuilder`

use std::path::PathBuf;

use super::builder::SnippetConfigBuilder;
use super::types::FetchStrategy;

impl SnippetConfigBuilder {
    #[must_use]
    pub fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.fetch_strategy = strategy;
        self
    }

    /// Search results endpoint; the keyword is appended as `q`
    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Selector tried first for the snippet element
    #[must_use]
    pub fn primary_selector(mut self, selector: impl Into<String>) -> Self {
        self.primary_selector = selector.into();
        self
    }

    /// Selector tried once when the primary one yields nothing
    #[must_use]
    pub fn alternate_selector(mut self, selector: impl Into<String>) -> Self {
        self.alternate_selector = selector.into();
        self
    }

    /// Bound on the page load (rendered) or the whole request (raw)
    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use this Chromium binary instead of discovering one
    ///
    /// A path that does not exist fails the rendered fetch; there is no
    /// fallback to discovery once a path is given.
    #[must_use]
    pub fn chrome_executable(mut self, path: Option<PathBuf>) -> Self {
        self.chrome_executable = path;
        self
    }

    /// Run Chromium with a visible window when `false` (debugging only)
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`
    #[must_use]
    pub fn completion_api_base(mut self, url: impl Into<String>) -> Self {
        self.completion_api_base = url.into();
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn generation_delay_ms(mut self, delay_ms: u64) -> Self {
        self.generation_delay_ms = delay_ms;
        self
    }
}
