//! Builder for `SnippetConfig`
//!
//! Every field has a default from `utils::constants`, so `build()` can be
//! called straight away. Validation happens once, in `build()`.

use scraper::Selector;
use std::path::PathBuf;
use thiserror::Error;

use super::types::{FetchStrategy, SnippetConfig};
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_ALTERNATE_SELECTOR, DEFAULT_COMPLETION_API_BASE,
    DEFAULT_COMPLETION_MODEL, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GENERATION_DELAY_MS,
    DEFAULT_MAX_TOKENS, DEFAULT_PRIMARY_SELECTOR, DEFAULT_SEARCH_URL, DEFAULT_TEMPERATURE,
    is_valid_url,
};

/// Rejected configuration values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {field} URL '{value}': expected an absolute http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid {field} selector '{value}': {reason}")]
    InvalidSelector {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Temperature must be between 0.0 and 2.0, got {0}")]
    TemperatureOutOfRange(f32),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("Model name cannot be empty")]
    EmptyModel,
}

/// Check that a selector parses as CSS
///
/// Parsing is repeated wherever the selector is applied; this only stops a
/// typo from surviving until the first page load.
fn validate_selector(field: &'static str, value: &str) -> Result<(), ConfigError> {
    Selector::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidSelector {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub struct SnippetConfigBuilder {
    pub(crate) fetch_strategy: FetchStrategy,
    pub(crate) search_url: String,
    pub(crate) primary_selector: String,
    pub(crate) alternate_selector: String,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) chrome_executable: Option<PathBuf>,
    pub(crate) headless: bool,
    pub(crate) completion_api_base: String,
    pub(crate) model: String,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
    pub(crate) generation_delay_ms: u64,
}

impl Default for SnippetConfigBuilder {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            primary_selector: DEFAULT_PRIMARY_SELECTOR.to_string(),
            alternate_selector: DEFAULT_ALTERNATE_SELECTOR.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: CHROME_USER_AGENT.to_string(),
            chrome_executable: None,
            headless: true,
            completion_api_base: DEFAULT_COMPLETION_API_BASE.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            generation_delay_ms: DEFAULT_GENERATION_DELAY_MS,
        }
    }
}

impl SnippetConfig {
    /// Create a builder for configuring a `SnippetConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SnippetConfigBuilder {
        SnippetConfigBuilder::default()
    }
}

impl Default for SnippetConfig {
    fn default() -> Self {
        let b = SnippetConfigBuilder::default();
        Self {
            fetch_strategy: b.fetch_strategy,
            search_url: b.search_url,
            primary_selector: b.primary_selector,
            alternate_selector: b.alternate_selector,
            fetch_timeout_secs: b.fetch_timeout_secs,
            user_agent: b.user_agent,
            chrome_executable: b.chrome_executable,
            headless: b.headless,
            completion_api_base: b.completion_api_base,
            model: b.model,
            max_tokens: b.max_tokens,
            temperature: b.temperature,
            generation_delay_ms: b.generation_delay_ms,
        }
    }
}

impl SnippetConfigBuilder {
    /// Validate and produce the final configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for malformed URLs or selectors, a temperature
    /// outside `0.0..=2.0`, a zero timeout or token budget, or an empty model.
    pub fn build(self) -> Result<SnippetConfig, ConfigError> {
        if !is_valid_url(&self.search_url) {
            return Err(ConfigError::InvalidUrl {
                field: "search",
                value: self.search_url,
            });
        }
        if !is_valid_url(&self.completion_api_base) {
            return Err(ConfigError::InvalidUrl {
                field: "completion API",
                value: self.completion_api_base,
            });
        }

        validate_selector("primary", &self.primary_selector)?;
        validate_selector("alternate", &self.alternate_selector)?;

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Zero("max_tokens"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Zero("fetch_timeout_secs"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        Ok(SnippetConfig {
            fetch_strategy: self.fetch_strategy,
            search_url: self.search_url,
            primary_selector: self.primary_selector,
            alternate_selector: self.alternate_selector,
            fetch_timeout_secs: self.fetch_timeout_secs,
            user_agent: self.user_agent,
            chrome_executable: self.chrome_executable,
            headless: self.headless,
            completion_api_base: self.completion_api_base.trim_end_matches('/').to_string(),
            model: self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            generation_delay_ms: self.generation_delay_ms,
        })
    }
}
