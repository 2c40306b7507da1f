//! API Facade for the application.
//!
//! Loads configuration, builds the production adapters and runs commands.

use std::path::Path;

use crate::adapters::{ArboardClipboard, HttpGeminiClient};
use crate::app::commands::{enhance, preview};
use crate::app::config::load_config;
use crate::domain::ArchitectConfig;

pub use crate::app::commands::enhance::{CopyStatus, EnhanceOptions, EnhanceOutcome};
pub use crate::domain::{AppError, GenerationRequest};

/// Load configuration relative to the current directory.
pub fn config(config_path: Option<&Path>) -> Result<ArchitectConfig, AppError> {
    load_config(config_path, &std::env::current_dir()?)
}

/// Enhance `idea` against the Gemini API.
///
/// The API key is read from the environment; a missing key surfaces as a
/// failed generation, not as an error from this function.
pub fn enhance(
    idea: &str,
    copy: bool,
    config_path: Option<&Path>,
) -> Result<EnhanceOutcome, AppError> {
    let config = config(config_path)?;
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    let mut clipboard = ArboardClipboard::new();

    let options = EnhanceOptions { copy: copy || config.output.copy_to_clipboard };
    enhance::execute(client, &mut clipboard, idea, options)
}

/// Build the request `enhance` would send, without sending it.
pub fn preview(idea: &str) -> Result<Option<GenerationRequest>, AppError> {
    preview::execute(idea)
}

/// Render a previewed request as pretty JSON.
pub fn render_preview(request: &GenerationRequest) -> Result<String, AppError> {
    preview::render(request)
}
