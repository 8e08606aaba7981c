//! Getter methods for `SnippetConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{FetchStrategy, SnippetConfig};

impl SnippetConfig {
    #[must_use]
    pub fn fetch_strategy(&self) -> FetchStrategy {
        self.fetch_strategy
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn primary_selector(&self) -> &str {
        &self.primary_selector
    }

    #[must_use]
    pub fn alternate_selector(&self) -> &str {
        &self.alternate_selector
    }

    #[must_use]
    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn chrome_executable(&self) -> Option<&Path> {
        self.chrome_executable.as_deref()
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// API base without a trailing slash
    #[must_use]
    pub fn completion_api_base(&self) -> &str {
        &self.completion_api_base
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    #[must_use]
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}
