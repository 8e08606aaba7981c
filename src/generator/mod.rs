//! Content generation through a text-completion API

mod client;
mod errors;
mod prompt;
mod types;

pub use client::CompletionClient;
pub use errors::GenerationError;
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
pub use types::{ApiKey, CompletionRequest, CompletionResponse};
