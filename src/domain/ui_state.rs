//! Four-state UI model.

/// Fixed user-facing text shown for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Something went wrong generating the prompt. Please check your API key or try again.";

/// Current state of the prompt form. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    /// Provider text, exactly as returned.
    Success(String),
    /// User-facing message; never the underlying cause.
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            UiState::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "IDLE",
            UiState::Loading => "LOADING",
            UiState::Success(_) => "SUCCESS",
            UiState::Error(_) => "ERROR",
        }
    }
}

/// What a call to `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A generation task was started and the state is now Loading.
    Started,
    /// Input was empty after trimming; nothing happened.
    SkippedEmpty,
    /// A generation is already in flight; nothing happened.
    SkippedBusy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(UiState::default(), UiState::Idle);
        assert!(UiState::default().can_submit());
    }

    #[test]
    fn loading_disables_submit() {
        assert!(!UiState::Loading.can_submit());
        assert!(UiState::Success("x".into()).can_submit());
        assert!(UiState::Error(GENERATION_FAILED_MESSAGE.into()).can_submit());
    }

    #[test]
    fn accessors_match_variant() {
        let success = UiState::Success("prompt".into());
        assert_eq!(success.result(), Some("prompt"));
        assert_eq!(success.error_message(), None);

        let error = UiState::Error("boom".into());
        assert_eq!(error.result(), None);
        assert_eq!(error.error_message(), Some("boom"));
        assert_eq!(error.label(), "ERROR");
    }
}
