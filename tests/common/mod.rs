//! Test utilities shared by the featured-snippet integration tests

use featured_snippet::{FetchStrategy, SnippetConfig};
use mockito::{Matcher, Mock, ServerGuard};

#[allow(dead_code)]
pub const PRIMARY: &str = "div.BNeawe.iBp4i.AP7Wnd";
#[allow(dead_code)]
pub const ALTERNATE: &str = "div.g span.BNeawe.s3v9rd.AP7Wnd";

/// Creates a search results page with the given body markup
#[allow(dead_code)]
pub fn create_serp_html(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en-GB">
<head>
    <meta charset="UTF-8">
    <title>Google Search</title>
</head>
<body>
    <div id="main">{body}</div>
</body>
</html>"#
    )
}

/// A page whose answer box matches the primary selector
#[allow(dead_code)]
pub fn primary_snippet_page(text: &str) -> String {
    create_serp_html(&format!(
        r#"<div class="BNeawe iBp4i AP7Wnd"><div>{text}</div></div>
           <div class="g"><span class="BNeawe s3v9rd AP7Wnd">Alternate text</span></div>"#
    ))
}

/// A page with only the alternate snippet layout
#[allow(dead_code)]
pub fn alternate_snippet_page(text: &str) -> String {
    create_serp_html(&format!(
        r#"<div class="g"><h3>Result</h3><span class="BNeawe s3v9rd AP7Wnd">{text}</span></div>"#
    ))
}

/// A page with organic results but no snippet
#[allow(dead_code)]
pub fn no_snippet_page() -> String {
    create_serp_html(r#"<div class="g"><h3>Result</h3><span class="st">Plain result</span></div>"#)
}

/// Config pointing both the search page and the completion API at `server`
///
/// Uses the raw fetcher and no generation delay.
#[allow(dead_code)]
pub fn test_config(server: &ServerGuard) -> SnippetConfig {
    SnippetConfig::builder()
        .fetch_strategy(FetchStrategy::Raw)
        .search_url(format!("{}/search", server.url()))
        .completion_api_base(format!("{}/v1", server.url()))
        .generation_delay_ms(0)
        .build()
        .expect("test config must be valid")
}

/// Mock `GET /search?q=<keyword>` returning `html`
#[allow(dead_code)]
pub async fn mock_search(server: &mut ServerGuard, keyword: &str, html: String) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), keyword.into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=UTF-8")
        .with_body(html)
        .create_async()
        .await
}

/// Mock `POST /v1/completions` with a status and JSON body
#[allow(dead_code)]
pub async fn mock_completion(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("POST", "/v1/completions")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Enable tracing output for a test run (RUST_LOG controls verbosity)
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
