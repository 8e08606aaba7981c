//! Shared configuration constants for featured-snippet
//!
//! Default values used by the config builder, so every entry point agrees on
//! the same search domain, selectors and completion parameters.

/// Google UK search results endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.co.uk/search";

/// Primary selector for the featured-snippet answer box
///
/// Matches a snapshot of Google's obfuscated class names. Expect it to break
/// whenever Google reshuffles its markup; override with `--primary-selector`.
pub const DEFAULT_PRIMARY_SELECTOR: &str = "div.BNeawe.iBp4i.AP7Wnd";

/// Fallback selector for other snippet layouts
pub const DEFAULT_ALTERNATE_SELECTOR: &str = "div.g span.BNeawe.s3v9rd.AP7Wnd";

/// Page load / request timeout for snippet retrieval: 10 seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// OpenAI-compatible API base URL
pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.openai.com/v1";

/// Legacy completion model used for generation
pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-003";

/// Maximum tokens requested from the completion API
pub const DEFAULT_MAX_TOKENS: u32 = 250;

/// Sampling temperature for generation
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Pause between showing the snippet and starting generation: 2 seconds
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2_000;

/// Desktop Chrome user agent sent by both fetch strategies
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
