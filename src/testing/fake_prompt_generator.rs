use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::domain::{GenerationError, ProviderError};
use crate::ports::PromptGenerator;

#[derive(Clone, Debug)]
enum FakeOutcome {
    Text(String),
    Empty,
    Failure(String),
    Panic,
}

/// Scripted generator that records every input it receives.
#[derive(Clone)]
pub struct FakePromptGenerator {
    outcome: FakeOutcome,
    calls: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Mutex<Receiver<()>>>>,
}

impl FakePromptGenerator {
    fn with_outcome(outcome: FakeOutcome) -> Self {
        Self { outcome, calls: Arc::new(Mutex::new(vec![])), gate: None }
    }

    pub fn succeeding(text: impl Into<String>) -> Self {
        Self::with_outcome(FakeOutcome::Text(text.into()))
    }

    pub fn empty() -> Self {
        Self::with_outcome(FakeOutcome::Empty)
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_outcome(FakeOutcome::Failure(reason.into()))
    }

    pub fn panicking() -> Self {
        Self::with_outcome(FakeOutcome::Panic)
    }

    /// Block each call until the returned sender releases it.
    pub fn gated(mut self) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        self.gate = Some(Arc::new(Mutex::new(rx)));
        (self, tx)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PromptGenerator for FakePromptGenerator {
    fn generate(&self, user_input: &str) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(user_input.to_string());

        if let Some(gate) = &self.gate {
            gate.lock().unwrap().recv().unwrap();
        }

        match &self.outcome {
            FakeOutcome::Text(text) => Ok(text.clone()),
            FakeOutcome::Empty => Err(GenerationError::EmptyResponse),
            FakeOutcome::Failure(reason) => Err(ProviderError::Transport(reason.clone()).into()),
            FakeOutcome::Panic => panic!("fake generator panicked"),
        }
    }
}
