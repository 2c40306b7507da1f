//! System instruction rendering.
//!
//! The instruction is an embedded minijinja template parameterized only by the
//! raw user input. The input is substituted verbatim: no escaping, no trimming.

use minijinja::{Environment, UndefinedBehavior, context};

use super::generation::GenerationError;

const TEMPLATE_NAME: &str = "system_instruction.md";
const TEMPLATE_SOURCE: &str = include_str!("../assets/system_instruction.md.j2");

/// Section labels the model is asked to emit, in order.
pub const SECTION_LABELS: [&str; 5] =
    ["**ROLE:**", "**CONTEXT:**", "**TASK:**", "**CONSTRAINTS:**", "**FORMAT:**"];

/// Rendered system-level directive for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction(String);

impl SystemInstruction {
    /// Render the instruction for `user_input`.
    pub fn render(user_input: &str) -> Result<Self, GenerationError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE).map_err(|e| {
            GenerationError::Instruction(format!(
                "Failed to register template '{}': {}",
                TEMPLATE_NAME, e
            ))
        })?;

        let template = env.get_template(TEMPLATE_NAME).map_err(|e| {
            GenerationError::Instruction(format!(
                "Failed to load template '{}': {}",
                TEMPLATE_NAME, e
            ))
        })?;

        template.render(context! { user_input => user_input }).map(Self).map_err(|e| {
            GenerationError::Instruction(format!(
                "Failed to render template '{}': {}",
                TEMPLATE_NAME, e
            ))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
