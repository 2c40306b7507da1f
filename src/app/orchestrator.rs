//! Request orchestration and the UI state machine.
//!
//! Transitions: Idle/Success/Error -> Loading on a non-empty submit, then
//! Loading -> Success | Error once the background task resolves. Nothing else
//! mutates the state.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::domain::{GENERATION_FAILED_MESSAGE, GenerationError, SubmitOutcome, UiState};
use crate::ports::PromptGenerator;

type PendingGeneration = JoinHandle<Result<String, GenerationError>>;

/// Owns the user input, the UI state and at most one in-flight generation.
pub struct Orchestrator<G: PromptGenerator + 'static> {
    generator: Arc<G>,
    input: String,
    state: UiState,
    pending: Option<PendingGeneration>,
}

impl<G: PromptGenerator + 'static> Orchestrator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            input: String::new(),
            state: UiState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Number of characters in the current input.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Store `raw_input` and start a generation for it.
    ///
    /// Whitespace-only input and submits while Loading are no-ops. Otherwise
    /// any prior result is dropped and the state is Loading when this returns.
    pub fn submit(&mut self, raw_input: impl Into<String>) -> SubmitOutcome {
        self.set_input(raw_input);

        if self.input.trim().is_empty() {
            log::debug!("Ignoring empty submit");
            return SubmitOutcome::SkippedEmpty;
        }
        if !self.state.can_submit() {
            log::debug!("Ignoring submit while a generation is in flight");
            return SubmitOutcome::SkippedBusy;
        }

        self.state = UiState::Loading;

        let generator = Arc::clone(&self.generator);
        let input = self.input.clone();
        let spawned = thread::Builder::new()
            .name("prompt-generation".to_string())
            .spawn(move || generator.generate(&input));

        match spawned {
            Ok(handle) => {
                log::debug!("Generation started ({} chars)", self.char_count());
                self.pending = Some(handle);
            }
            Err(err) => {
                log::error!("Failed to start generation task: {}", err);
                self.fail();
            }
        }
        SubmitOutcome::Started
    }

    /// Apply the task result if it has finished. Never blocks.
    pub fn poll(&mut self) -> &UiState {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            self.resolve();
        }
        &self.state
    }

    /// Block until the in-flight generation, if any, resolves.
    pub fn wait(&mut self) -> &UiState {
        self.resolve();
        &self.state
    }

    fn resolve(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };

        match handle.join() {
            Ok(Ok(text)) => {
                log::debug!("Generation succeeded ({} chars)", text.chars().count());
                self.state = UiState::Success(text);
            }
            Ok(Err(err)) => {
                log::error!("Prompt generation failed: {}", err);
                self.fail();
            }
            Err(_) => {
                log::error!("Prompt generation task panicked");
                self.fail();
            }
        }
    }

    fn fail(&mut self) {
        self.state = UiState::Error(GENERATION_FAILED_MESSAGE.to_string());
    }
}
