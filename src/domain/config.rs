//! Configuration models loaded from `prompt-architect.toml`.

use serde::Deserialize;
use url::Url;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "prompt-architect.toml";

/// Environment variables checked for the provider API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitectConfig {
    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Result handling.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// API base URL; the model path is appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds. Unset means the call may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

/// Result handling options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Copy a successful result to the clipboard without asking.
    #[serde(default)]
    pub copy_to_clipboard: bool,
}
