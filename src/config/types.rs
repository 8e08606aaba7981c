//! Core configuration types for snippet retrieval and generation
//!
//! `SnippetConfig` carries every tunable of one interaction: where to search,
//! which selectors identify the snippet, how pages are fetched, and how the
//! completion API is called. It never holds the API credential.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the search results page is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// Headless Chromium; executes page scripts before reading the DOM
    #[default]
    Rendered,
    /// Plain HTTP GET; reads the markup as served
    Raw,
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rendered => write!(f, "rendered"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// Main configuration struct for a snippet interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetConfig {
    pub(crate) fetch_strategy: FetchStrategy,
    pub(crate) search_url: String,
    pub(crate) primary_selector: String,
    pub(crate) alternate_selector: String,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) user_agent: String,

    /// Explicit Chromium executable. When `None` the browser is discovered
    /// from `CHROMIUM_PATH` and the usual install locations.
    pub(crate) chrome_executable: Option<PathBuf>,
    pub(crate) headless: bool,

    pub(crate) completion_api_base: String,
    pub(crate) model: String,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,

    /// Pause after the snippet is shown, before generation starts
    pub(crate) generation_delay_ms: u64,
}
