//! Generation client port definition.

use crate::domain::GenerationError;

/// Port for turning a raw idea into a structured system prompt.
///
/// Implementations build the outbound request themselves and return the
/// provider's text unmodified.
pub trait PromptGenerator: Send + Sync {
    fn generate(&self, user_input: &str) -> Result<String, GenerationError>;
}

impl<G: PromptGenerator + ?Sized> PromptGenerator for Box<G> {
    fn generate(&self, user_input: &str) -> Result<String, GenerationError> {
        (**self).generate(user_input)
    }
}
