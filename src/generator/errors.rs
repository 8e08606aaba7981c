//! Error types for content generation
//!
//! Display strings double as the messages shown to the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential was supplied; no request was sent
    #[error("OpenAI API key is required.")]
    MissingCredential,

    /// The API rejected the credential (HTTP 401)
    #[error("Invalid OpenAI API key.")]
    Authentication { message: String },

    /// Any other error response from the API
    #[error("Error generating content: {message}")]
    Api { status: u16, message: String },

    #[error("Error generating content: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error generating content: the API returned no choices")]
    EmptyResponse,
}

impl GenerationError {
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, GenerationError::Authentication { .. })
    }
}
