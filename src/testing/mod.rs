mod fake_prompt_generator;
mod mock_clipboard;

pub use fake_prompt_generator::FakePromptGenerator;
pub use mock_clipboard::MockClipboard;
