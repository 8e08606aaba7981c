//! Error types for snippet retrieval

use thiserror::Error;

/// Why a search results page could not be read
///
/// A page that loads but matches no selector is not an error; fetchers
/// report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search page returned HTTP {0}")]
    Status(u16),

    #[error("{operation} timeout after {secs} seconds")]
    Timeout { operation: &'static str, secs: u64 },

    #[error("Browser executable not found: {0}")]
    BrowserNotFound(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Failed to prepare browser profile: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for FetchError {
    fn from(error: chromiumoxide::error::CdpError) -> Self {
        FetchError::Browser(error.to_string())
    }
}
