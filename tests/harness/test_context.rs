//! Shared testing harness for `prompt-architect` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::Path;

/// Path the Gemini client posts to, relative to the configured API URL.
pub(crate) const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary with no credential and no log filter.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("prompt-architect").expect("Failed to locate prompt-architect binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Same as [`cli`](Self::cli) with a fake API key set.
    pub(crate) fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }

    /// Point the default config file at `api_url`.
    pub(crate) fn write_config(&self, api_url: &str) {
        self.root
            .child("prompt-architect.toml")
            .write_str(&format!("[gemini]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url))
            .expect("Failed to write config");
    }
}

/// Gemini response body carrying `text` as the only part.
pub(crate) fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}
