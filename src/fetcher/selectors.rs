//! Snippet selectors and HTML extraction

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::SnippetConfig;

/// The pair of CSS selectors that locate a featured snippet
///
/// `primary` is always tried first. `alternate` is only consulted when the
/// primary selector matches nothing or matches an element without text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSelectors {
    pub primary: String,
    pub alternate: String,
}

impl SnippetSelectors {
    #[must_use]
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: alternate.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SnippetConfig) -> Self {
        Self::new(config.primary_selector(), config.alternate_selector())
    }

    /// Selectors in the order they are tried
    #[must_use]
    pub fn in_order(&self) -> [&str; 2] {
        [&self.primary, &self.alternate]
    }
}

/// Fold markup whitespace the way a browser lays out inline text
///
/// Runs of spaces, tabs and source newlines become one space; the ends are
/// trimmed. Text nodes are joined as-is, so `6<b>-7</b>` stays `6-7`.
pub(crate) fn collapse_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let joined: String = fragments.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tidy rendered text while keeping its line breaks
///
/// Each line has its inner runs of spaces folded and its ends trimmed; blank
/// lines are dropped.
pub(crate) fn tidy_rendered_text(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the featured snippet text from raw page markup
///
/// Returns the text of the first element matching the primary selector, or
/// failing that the alternate selector. `None` when neither yields text.
#[must_use]
pub fn extract_snippet(html: &str, selectors: &SnippetSelectors) -> Option<String> {
    let document = Html::parse_document(html);
    selectors
        .in_order()
        .into_iter()
        .find_map(|css| first_match_text(&document, css))
}

fn first_match_text(document: &Html, css: &str) -> Option<String> {
    let selector = match Selector::parse(css) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Skipping unparsable selector '{}': {}", css, e);
            return None;
        }
    };

    let Some(element) = document.select(&selector).next() else {
        debug!("Selector '{}' matched nothing", css);
        return None;
    };

    let text = collapse_whitespace(element.text());
    if text.is_empty() {
        debug!("Selector '{}' matched an element without text", css);
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> SnippetSelectors {
        SnippetSelectors::new("div.answer", "span.fallback")
    }

    #[test]
    fn primary_match_wins() {
        let html = r#"<div class="answer">  Rust is a
            systems language. </div><span class="fallback">Other</span>"#;
        assert_eq!(
            extract_snippet(html, &selectors()).as_deref(),
            Some("Rust is a systems language.")
        );
    }

    #[test]
    fn alternate_used_when_primary_missing() {
        let html = r#"<p>nothing</p><span class="fallback"> Fallback <b>text</b> </span>"#;
        assert_eq!(
            extract_snippet(html, &selectors()).as_deref(),
            Some("Fallback text")
        );
    }

    #[test]
    fn alternate_used_when_primary_is_empty() {
        let html = r#"<div class="answer">   </div><span class="fallback">Fallback</span>"#;
        assert_eq!(extract_snippet(html, &selectors()).as_deref(), Some("Fallback"));
    }

    #[test]
    fn neither_selector_matches() {
        assert_eq!(extract_snippet("<html><body></body></html>", &selectors()), None);
    }

    #[test]
    fn bad_selector_is_treated_as_a_miss() {
        let sel = SnippetSelectors::new("div[", "span.fallback");
        let html = r#"<span class="fallback">ok</span>"#;
        assert_eq!(extract_snippet(html, &sel).as_deref(), Some("ok"));
    }

    #[test]
    fn whitespace_collapses() {
        let parts = ["  a \n", "b\t", " ", "c  "];
        assert_eq!(collapse_whitespace(parts.into_iter()), "a b c");
    }

    #[test]
    fn inline_markup_adds_no_spaces() {
        let html = r#"<div class="answer">Boil for 6<b>-7</b> minutes, about 10<span>%</span> less.</div>"#;
        assert_eq!(
            extract_snippet(html, &selectors()).as_deref(),
            Some("Boil for 6-7 minutes, about 10% less.")
        );
    }

    #[test]
    fn adjacent_fragments_are_joined_verbatim() {
        let parts = ["Rust", "acean", " crab "];
        assert_eq!(collapse_whitespace(parts.into_iter()), "Rustacean crab");
    }

    #[test]
    fn rendered_text_keeps_line_breaks() {
        let text = "  Step one:  boil water \n\n  Step two: add   eggs\n";
        assert_eq!(
            tidy_rendered_text(text),
            "Step one: boil water\nStep two: add eggs"
        );
    }
}
