pub mod browser_setup;
pub mod config;
pub mod display;
pub mod fetcher;
pub mod generator;
pub mod utils;
pub mod workflow;

pub use browser_setup::{find_browser_executable, resolve_browser_executable};
pub use config::{ConfigError, FetchStrategy, SnippetConfig};
pub use fetcher::{
    FetchError, Fetcher, PageFetcher, RawFetch, RenderedFetch, SnippetRetriever, SnippetSelectors,
};
pub use generator::{ApiKey, CompletionClient, GenerationError};
pub use utils::build_search_url;
pub use workflow::{
    InteractionReport, InteractionRequest, InteractionState, Notice, NoticeLevel, Workflow,
};

/// Run one interaction with the fetch strategy chosen in `config`
///
/// # Errors
///
/// Fails only if the HTTP clients cannot be set up; problems during the
/// interaction itself are reported as notices.
pub async fn generate_featured_snippet(
    config: &SnippetConfig,
    request: &InteractionRequest,
) -> anyhow::Result<InteractionReport> {
    let workflow = Workflow::from_config(config)?;
    Ok(workflow.run(request).await)
}
