//! The single user-triggered workflow
//!
//! `Idle -> Fetching -> (Generating ->) Done`. Generation never starts before
//! retrieval has finished and is skipped when retrieval finds no snippet.

pub mod messages;
mod types;

pub use types::{InteractionReport, InteractionRequest, InteractionState, Notice, NoticeLevel};

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::SnippetConfig;
use crate::fetcher::{Fetcher, PageFetcher, SnippetRetriever};
use crate::generator::{ApiKey, CompletionClient, GenerationError};

/// Retrieval followed by generation, for one keyword at a time
///
/// Holds no per-interaction state; every `run` starts from `Idle`.
pub struct Workflow<F> {
    retriever: SnippetRetriever<F>,
    generator: CompletionClient,
    generation_delay: Duration,
}

impl Workflow<Fetcher> {
    /// Build a workflow with the fetch strategy chosen in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn from_config(config: &SnippetConfig) -> Result<Self> {
        let fetcher = Fetcher::from_config(config).context("Failed to set up page fetcher")?;
        let generator =
            CompletionClient::from_config(config).context("Failed to set up completion client")?;
        Ok(Self::new(fetcher, generator, config))
    }
}

impl<F: PageFetcher> Workflow<F> {
    #[must_use]
    pub fn new(fetcher: F, generator: CompletionClient, config: &SnippetConfig) -> Self {
        Self {
            retriever: SnippetRetriever::new(fetcher, config),
            generator,
            generation_delay: config.generation_delay(),
        }
    }

    /// Run one interaction to completion
    ///
    /// Never fails: every error becomes a notice in the returned report.
    pub async fn run(&self, request: &InteractionRequest) -> InteractionReport {
        let mut report = InteractionReport::new(request.keyword.trim());

        let Some((api_key, keyword)) = request.validate() else {
            info!("Rejecting interaction with missing input");
            report.push(Notice::error(messages::MISSING_INPUT));
            report.enter(InteractionState::Done);
            return report;
        };

        report.enter(InteractionState::Fetching);
        report.push(Notice::info(messages::FETCHING));

        let Some(snippet) = self.fetch_snippet(keyword, &mut report).await else {
            report.push(Notice::warning(messages::TRY_DIFFERENT_KEYWORD));
            report.enter(InteractionState::Done);
            return report;
        };

        report.push(Notice::success(messages::existing_snippet(&snippet)));
        report.push(Notice::heading(messages::BEAT_THIS_SNIPPET));
        report.snippet = Some(snippet);

        report.enter(InteractionState::Generating);
        report.push(Notice::info(messages::GENERATING));
        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        if let Some(content) = self.generate_content(keyword, Some(&api_key), &mut report).await {
            report.push(Notice::content(content.clone()));
            report.content = Some(content);
        }

        report.enter(InteractionState::Done);
        report
    }

    async fn fetch_snippet(&self, keyword: &str, report: &mut InteractionReport) -> Option<String> {
        match self.retriever.retrieve(keyword).await {
            Ok(Some(snippet)) => Some(snippet),
            Ok(None) => {
                report.push(Notice::warning(messages::SNIPPET_NOT_FOUND));
                None
            }
            Err(e) => {
                warn!("Snippet retrieval failed: {}", e);
                report.push(Notice::error(messages::fetch_failed(&e)));
                None
            }
        }
    }

    /// Run the generation step and turn failures into notices
    ///
    /// Empty generated text counts as no content.
    pub async fn generate_content(
        &self,
        keyword: &str,
        api_key: Option<&ApiKey>,
        report: &mut InteractionReport,
    ) -> Option<String> {
        match self.generator.generate(keyword, api_key).await {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => {
                info!("Completion API returned empty text");
                None
            }
            Err(e) => {
                if let GenerationError::Authentication { message } = &e {
                    warn!("Completion API rejected the key: {}", message);
                } else {
                    warn!("Content generation failed: {}", e);
                }
                report.push(Notice::error(e.to_string()));
                None
            }
        }
    }
}
