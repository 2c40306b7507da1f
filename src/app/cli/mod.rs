//! CLI Adapter.

mod interactive;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, CopyStatus, EnhanceOutcome};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "prompt-architect")]
#[command(version)]
#[command(
    about = "Transform simple ideas into structured system prompts",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./prompt-architect.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance an idea into a five-section system prompt
    #[clap(visible_alias = "e")]
    Enhance {
        /// The idea to enhance (read from stdin when omitted)
        idea: Option<String>,
        /// Copy the generated prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show the request that would be sent, without calling the API
    #[clap(visible_alias = "p")]
    Preview {
        /// The idea to preview (read from stdin when omitted)
        idea: Option<String>,
    },
    /// Start an interactive session (default)
    #[clap(visible_alias = "i")]
    Interactive,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Enhance { idea, copy } => {
            read_idea(idea).and_then(|idea| run_enhance(&idea, copy, config))
        }
        Commands::Preview { idea } => read_idea(idea).and_then(|idea| run_preview(&idea)).map(|_| 0),
        Commands::Interactive => interactive::run_session(config).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
}

fn read_idea(idea: Option<String>) -> Result<String, AppError> {
    match idea {
        Some(value) => Ok(value),
        None if io::stdin().is_terminal() => Ok(String::new()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_enhance(idea: &str, copy: bool, config: Option<&std::path::Path>) -> Result<i32, AppError> {
    match api::enhance(idea, copy, config)? {
        EnhanceOutcome::Skipped => Ok(0),
        EnhanceOutcome::Generated { text, copy } => {
            println!("{}", text);
            report_copy(&copy);
            Ok(0)
        }
        EnhanceOutcome::Failed { message } => {
            eprintln!("❌ {}", message);
            Ok(1)
        }
    }
}

fn run_preview(idea: &str) -> Result<(), AppError> {
    if let Some(request) = api::preview(idea)? {
        println!("{}", api::render_preview(&request)?);
    }
    Ok(())
}

fn report_copy(copy: &CopyStatus) {
    match copy {
        CopyStatus::NotRequested => {}
        CopyStatus::Copied => eprintln!("✅ Copied to clipboard"),
        CopyStatus::Failed(reason) => eprintln!("⚠️  Could not copy to clipboard: {}", reason),
    }
}
