//! Enhance command: one submit/resolve cycle, optionally copying the result.

use crate::app::Orchestrator;
use crate::domain::{AppError, SubmitOutcome, UiState};
use crate::ports::{ClipboardWriter, PromptGenerator};

/// Options for a single enhancement.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhanceOptions {
    /// Copy a successful result to the clipboard.
    pub copy: bool,
}

/// Clipboard handling for a generated prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    NotRequested,
    Copied,
    Failed(String),
}

/// Result of an enhance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceOutcome {
    /// Input was empty; nothing was sent.
    Skipped,
    /// The provider returned text.
    Generated { text: String, copy: CopyStatus },
    /// Generation failed; `message` is the fixed user-facing text.
    Failed { message: String },
}

/// Execute the enhance command.
pub fn execute<G, C>(
    generator: G,
    clipboard: &mut C,
    idea: &str,
    options: EnhanceOptions,
) -> Result<EnhanceOutcome, AppError>
where
    G: PromptGenerator + 'static,
    C: ClipboardWriter,
{
    let mut orchestrator = Orchestrator::new(generator);

    if orchestrator.submit(idea) != SubmitOutcome::Started {
        return Ok(EnhanceOutcome::Skipped);
    }

    match orchestrator.wait() {
        UiState::Success(text) => {
            let copy =
                if options.copy { copy_result(clipboard, text) } else { CopyStatus::NotRequested };
            Ok(EnhanceOutcome::Generated { text: text.clone(), copy })
        }
        UiState::Error(message) => Ok(EnhanceOutcome::Failed { message: message.clone() }),
        state => Err(AppError::InternalError(format!(
            "Generation finished in unexpected state {}",
            state.label()
        ))),
    }
}

/// Copy `text`, reporting failure instead of propagating it.
pub fn copy_result<C: ClipboardWriter>(clipboard: &mut C, text: &str) -> CopyStatus {
    match clipboard.write_text(text) {
        Ok(()) => CopyStatus::Copied,
        Err(err) => {
            log::warn!("Clipboard write failed: {}", err);
            CopyStatus::Failed(err.to_string())
        }
    }
}
