//! prompt-architect: turn a short idea into a structured five-section system prompt.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::Orchestrator;
pub use app::api::{
    CopyStatus, EnhanceOptions, EnhanceOutcome, config, enhance, preview, render_preview,
};
pub use domain::{AppError, GENERATION_FAILED_MESSAGE, GenerationRequest, SubmitOutcome, UiState};
