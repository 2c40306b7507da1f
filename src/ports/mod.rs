mod clipboard_writer;
mod prompt_generator;

pub use clipboard_writer::ClipboardWriter;
pub use prompt_generator::PromptGenerator;
