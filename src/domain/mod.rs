pub mod config;
pub mod error;
pub mod generation;
pub mod generation_request;
pub mod system_instruction;
pub mod ui_state;

pub use config::{
    API_KEY_ENV_VARS, ArchitectConfig, CONFIG_FILE_NAME, GeminiApiConfig, OutputConfig,
};
pub use error::AppError;
pub use generation::{GenerationError, ProviderError};
pub use generation_request::{GenerationRequest, MODEL, TEMPERATURE};
pub use system_instruction::{SECTION_LABELS, SystemInstruction};
pub use ui_state::{GENERATION_FAILED_MESSAGE, SubmitOutcome, UiState};
