//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ArchitectConfig, CONFIG_FILE_NAME};

/// Load configuration from `explicit`, or from `prompt-architect.toml` in
/// `working_dir` when present. Falls back to defaults when neither applies.
pub fn load_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<ArchitectConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(AppError::ConfigFileNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = working_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ArchitectConfig::default());
            }
            candidate
        }
    };

    log::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

pub fn parse_config_content(content: &str) -> Result<ArchitectConfig, AppError> {
    Ok(toml::from_str(content)?)
}
