//! Preview command: show the outbound request without calling the provider.

use crate::domain::{AppError, GenerationRequest};

/// Build the request that `enhance` would send. `None` for blank input.
pub fn execute(idea: &str) -> Result<Option<GenerationRequest>, AppError> {
    if idea.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(GenerationRequest::for_input(idea)?))
}

/// Pretty JSON rendering of a previewed request.
pub fn render(request: &GenerationRequest) -> Result<String, AppError> {
    serde_json::to_string_pretty(request)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize request: {}", e)))
}
