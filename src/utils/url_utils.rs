//! URL helpers for building search requests.

use url::Url;

/// Build the search results URL for a keyword
///
/// The keyword is placed in the `q` query parameter and percent-encoded, so
/// characters such as `&`, `#` or `?` stay part of the query instead of
/// changing the URL structure.
///
/// # Errors
///
/// Returns an error if `base` is not an absolute URL.
pub fn build_search_url(base: &str, keyword: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("q", keyword);
    Ok(url)
}

/// Check if a URL is an absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_placed_in_query() {
        let url = build_search_url("https://www.google.co.uk/search", "what is rust").unwrap();
        assert_eq!(url.host_str(), Some("www.google.co.uk"));
        assert_eq!(url.path(), "/search");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "q");
        assert_eq!(pairs[0].1, "what is rust");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let url = build_search_url("https://www.google.co.uk/search", "c++ & rust? #1").unwrap();
        let query = url.query().unwrap();
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(url.fragment().is_none());
        let decoded: Vec<_> = url.query_pairs().collect();
        assert_eq!(decoded[0].1, "c++ & rust? #1");
    }

    #[test]
    fn relative_base_is_rejected() {
        assert!(build_search_url("/search", "rust").is_err());
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://api.openai.com/v1"));
        assert!(is_valid_url("http://127.0.0.1:1234/search"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("not a url"));
    }
}
