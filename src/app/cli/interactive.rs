//! Interactive session: the terminal rendition of the single-page form.

use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::adapters::{ArboardClipboard, HttpGeminiClient};
use crate::app::Orchestrator;
use crate::app::api;
use crate::app::commands::enhance::{CopyStatus, copy_result};
use crate::domain::{AppError, SubmitOutcome, UiState};
use crate::ports::{ClipboardWriter, PromptGenerator};

const POLL_INTERVAL: Duration = Duration::from_millis(150);

const FEATURES: [(&str, &str); 3] = [
    (
        "Smart Role Detection",
        "Automatically assigns the perfect persona (Engineer, Copywriter, etc.) for your task.",
    ),
    (
        "Context Expansion",
        "Expands vague inputs into detailed context statements to reduce AI hallucination.",
    ),
    (
        "Structured Output",
        "Formats the final prompt with clear constraints, tasks, and output requirements.",
    ),
];

pub fn run_session(config_path: Option<&Path>) -> Result<(), AppError> {
    let config = api::config(config_path)?;
    let client = HttpGeminiClient::from_env(&config.gemini)?;
    let mut clipboard = ArboardClipboard::new();
    let mut orchestrator = Orchestrator::new(client);

    print_banner();

    loop {
        let Some(idea) = prompt_idea()? else {
            println!("👋 Bye");
            return Ok(());
        };

        if orchestrator.submit(idea) != SubmitOutcome::Started {
            continue;
        }

        print!("⏳ Generating ({} chars)", orchestrator.char_count());
        io::stdout().flush()?;
        wait_with_progress(&mut orchestrator)?;
        println!();

        match orchestrator.state() {
            UiState::Success(text) => {
                print_result(text);
                offer_copy(&mut clipboard, text, config.output.copy_to_clipboard)?;
            }
            UiState::Error(message) => eprintln!("❌ {}", message),
            UiState::Idle | UiState::Loading => {}
        }
    }
}

fn print_banner() {
    println!("✨ AI Prompt Architect");
    println!("Transform simple ideas into professional-grade system prompts.");
    println!();
    for (title, description) in FEATURES {
        println!("  • {}: {}", title, description);
    }
    println!();
}

fn prompt_idea() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Your simple idea")
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InputError(err.to_string())),
    }
}

fn wait_with_progress<G: PromptGenerator + 'static>(
    orchestrator: &mut Orchestrator<G>,
) -> Result<(), AppError> {
    while orchestrator.poll().is_loading() {
        thread::sleep(POLL_INTERVAL);
        print!(".");
        io::stdout().flush()?;
    }
    Ok(())
}

fn print_result(text: &str) {
    println!("── Generated System Prompt ──────────────────────────");
    println!("{}", text);
    println!("─────────────────────────────────────────────────────");
}

fn offer_copy<C: ClipboardWriter>(
    clipboard: &mut C,
    text: &str,
    always: bool,
) -> Result<(), AppError> {
    let copy = always
        || match Confirm::new().with_prompt("Copy to clipboard?").default(true).interact() {
            Ok(answer) => answer,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => false,
            Err(err) => return Err(AppError::InputError(err.to_string())),
        };

    if copy {
        match copy_result(clipboard, text) {
            CopyStatus::Copied => println!("✅ Copied!"),
            CopyStatus::Failed(reason) => eprintln!("⚠️  Could not copy to clipboard: {}", reason),
            CopyStatus::NotRequested => {}
        }
    }
    Ok(())
}
