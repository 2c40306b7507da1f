use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    pub written: Vec<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn failing() -> Self {
        Self { written: vec![], should_fail: true }
    }

    pub fn last(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}
