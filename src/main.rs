// featured-snippet: scrape the Google UK featured snippet for a keyword and
// generate competing content with a completion API.
//
// Notices go to stdout; tracing logs go to stderr (RUST_LOG, default "warn").

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use featured_snippet::display::{render_banner, render_json, render_text};
use featured_snippet::utils::{
    DEFAULT_ALTERNATE_SELECTOR, DEFAULT_COMPLETION_API_BASE, DEFAULT_COMPLETION_MODEL,
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GENERATION_DELAY_MS, DEFAULT_PRIMARY_SELECTOR,
    DEFAULT_SEARCH_URL,
};
use featured_snippet::{FetchStrategy, InteractionRequest, SnippetConfig, generate_featured_snippet};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FetcherArg {
    /// Headless Chromium, runs page scripts
    Rendered,
    /// Plain HTTP request, markup only
    Raw,
}

impl From<FetcherArg> for FetchStrategy {
    fn from(arg: FetcherArg) -> Self {
        match arg {
            FetcherArg::Rendered => FetchStrategy::Rendered,
            FetcherArg::Raw => FetchStrategy::Raw,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "featured-snippet",
    version,
    about = "Generate content to win a Google UK featured snippet"
)]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Target keyword or question
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// How the search page is fetched
    #[arg(long, value_enum, default_value_t = FetcherArg::Rendered)]
    fetcher: FetcherArg,

    /// Chromium executable for the rendered fetcher (discovered when omitted)
    #[arg(long, env = "CHROMIUM_PATH")]
    chrome_path: Option<PathBuf>,

    /// Show the browser window (rendered fetcher only)
    #[arg(long)]
    headed: bool,

    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    #[arg(long, default_value = DEFAULT_PRIMARY_SELECTOR)]
    primary_selector: String,

    #[arg(long, default_value = DEFAULT_ALTERNATE_SELECTOR)]
    alternate_selector: String,

    /// Page load / request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_COMPLETION_API_BASE)]
    api_base: String,

    #[arg(long, default_value = DEFAULT_COMPLETION_MODEL)]
    model: String,

    /// Pause before generation, in milliseconds
    #[arg(long, default_value_t = DEFAULT_GENERATION_DELAY_MS)]
    delay_ms: u64,

    /// Print the interaction report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> Result<SnippetConfig> {
        SnippetConfig::builder()
            .fetch_strategy(self.fetcher.into())
            .chrome_executable(self.chrome_path.clone())
            .headless(!self.headed)
            .search_url(&self.search_url)
            .primary_selector(&self.primary_selector)
            .alternate_selector(&self.alternate_selector)
            .fetch_timeout_secs(self.timeout)
            .completion_api_base(&self.api_base)
            .model(&self.model)
            .generation_delay_ms(self.delay_ms)
            .build()
            .context("Invalid configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    tracing::debug!(?config, "Configuration loaded");

    let request = InteractionRequest::new(cli.api_key.clone(), cli.keyword.clone());

    if !cli.json {
        let mut stdout = std::io::stdout().lock();
        render_banner(&mut stdout)?;
        stdout.flush()?;
    }

    let report = generate_featured_snippet(&config, &request).await?;

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        render_json(&report, &mut stdout)?;
    } else {
        render_text(&report, &mut stdout)?;
    }
    Ok(())
}
