//! User-facing notice text

pub const APP_TITLE: &str = "Featured Snippet SEO Content Generator (UK-based)";

pub const APP_INTRO: &str = "Generate optimised content to win Featured Snippets on Google UK. \
Give a target keyword/topic and the existing Featured Snippet is scraped from Google UK, \
then superior content is generated with OpenAI.";

pub const MISSING_INPUT: &str = "Please enter both the OpenAI API key and a keyword.";

pub const FETCHING: &str = "Fetching Google's Featured Snippet from Google UK...";

pub const SNIPPET_NOT_FOUND: &str = "No Featured Snippet found for this keyword in Google UK.";

pub const TRY_DIFFERENT_KEYWORD: &str = "No Featured Snippet found. Try a different keyword.";

pub const BEAT_THIS_SNIPPET: &str = "Generate Optimised Content to Beat This Snippet:";

pub const GENERATING: &str = "Generating optimised content...";

#[must_use]
pub fn existing_snippet(snippet: &str) -> String {
    format!("Existing Featured Snippet from Google UK: {snippet}")
}

#[must_use]
pub fn fetch_failed(error: &impl std::fmt::Display) -> String {
    format!("Error fetching the Google page: {error}")
}
