pub mod clipboard_arboard;
pub mod gemini_client_http;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::{HttpGeminiClient, resolve_api_key};
