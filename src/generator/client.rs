//! HTTP client for the text-completion API

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use super::errors::GenerationError;
use super::prompt::build_prompt;
use super::types::{ApiErrorBody, ApiKey, CompletionRequest, CompletionResponse};
use crate::config::SnippetConfig;

/// Calls `POST {api_base}/completions` with fixed sampling parameters
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CompletionClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &SnippetConfig) -> Result<Self, GenerationError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/completions", config.completion_api_base()),
            model: config.model().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate competing content for `keyword`
    ///
    /// The credential is checked before anything goes over the network.
    /// Returns the first choice's text with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` when `api_key` is `None`
    /// - `Authentication` when the API answers 401
    /// - `Api` for any other error status, carrying the API's message
    /// - `Transport` for connection or decoding failures
    /// - `EmptyResponse` when the API returns no choices
    pub async fn generate(
        &self,
        keyword: &str,
        api_key: Option<&ApiKey>,
    ) -> Result<String, GenerationError> {
        let api_key = api_key.ok_or(GenerationError::MissingCredential)?;

        let request = CompletionRequest {
            model: &self.model,
            prompt: build_prompt(keyword),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        info!("Requesting completion from {} (model {})", self.endpoint, self.model);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = error_from_response(status, &body);
            warn!("Completion request failed with HTTP {}: {}", status, error);
            return Err(error);
        }

        let parsed: CompletionResponse = response.json().await?;
        debug!("Completion returned {} choice(s)", parsed.choices.len());

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or(GenerationError::EmptyResponse)
    }
}

/// Map an error response onto `GenerationError`
///
/// A 401, or an `invalid_api_key` error code under any status, is an
/// authentication failure.
fn error_from_response(status: StatusCode, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);

    if let Some(kind) = detail.as_ref().and_then(|d| d.kind.as_deref()) {
        debug!("API error type: {}", kind);
    }

    let invalid_key = detail
        .as_ref()
        .and_then(|d| d.code.as_deref())
        .is_some_and(|code| code == "invalid_api_key");

    let message = detail
        .map(|d| d.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("unexpected response (HTTP {}): {}", status.as_u16(), body));

    if status == StatusCode::UNAUTHORIZED || invalid_key {
        GenerationError::Authentication { message }
    } else {
        GenerationError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
