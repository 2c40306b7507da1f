//! Outbound call contract for a single generation.

use serde::Serialize;

use super::generation::GenerationError;
use super::system_instruction::SystemInstruction;

/// Fixed model identifier.
pub const MODEL: &str = "gemini-2.5-flash";

/// Fixed creativity parameter.
pub const TEMPERATURE: f32 = 0.7;

/// Everything the provider receives for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub model: String,
    #[serde(serialize_with = "serialize_instruction")]
    pub system_instruction: SystemInstruction,
    /// The raw user input, sent as the triggering content.
    pub contents: String,
    pub temperature: f32,
}

impl GenerationRequest {
    /// Build a fresh request for `user_input`.
    pub fn for_input(user_input: &str) -> Result<Self, GenerationError> {
        Ok(Self {
            model: MODEL.to_string(),
            system_instruction: SystemInstruction::render(user_input)?,
            contents: user_input.to_string(),
            temperature: TEMPERATURE,
        })
    }
}

fn serialize_instruction<S: serde::Serializer>(
    instruction: &SystemInstruction,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(instruction.as_str())
}
