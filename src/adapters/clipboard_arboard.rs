//! System clipboard adapter.

use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-backed clipboard, opened on first write so headless sessions
/// only fail when a copy is actually requested.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(clipboard_error)?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("Clipboard unavailable".to_string()))
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardError(err.to_string())
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text.to_owned()).map_err(clipboard_error)?;
        log::debug!("Copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
