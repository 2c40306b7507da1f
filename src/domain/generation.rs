//! Outcome taxonomy for a single generation call.

use thiserror::Error;

/// Failure raised by a [`PromptGenerator`](crate::ports::PromptGenerator).
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider answered but returned no usable text.
    #[error("No text returned from the model provider")]
    EmptyResponse,

    /// The system instruction could not be rendered.
    #[error("Failed to build system instruction: {0}")]
    Instruction(String),

    /// Transport, authentication, rate-limit or other provider failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Provider-side failures. The cause is kept for diagnostics only.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not set (expected GEMINI_API_KEY or API_KEY)")]
    MissingCredential,

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Authentication rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Rate limited (429): {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ProviderError::Unauthorized { status, message },
            429 => ProviderError::RateLimited(message),
            _ => ProviderError::Api { status, message },
        }
    }
}
