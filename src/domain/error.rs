use std::io;

use thiserror::Error;

use super::generation::GenerationError;

/// Library-wide error type for prompt-architect operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive input could not be read.
    #[error("Failed to read input: {0}")]
    InputError(String),

    /// Invariant violated inside the application.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Prompt generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
