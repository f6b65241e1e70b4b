//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and resolves which changelog file to validate.

use crate::cli::Args;
use changelog_validator_core::{
    ChangelogError, ChangelogReport, ValidatorConfig, find_changelog_file,
};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither a file nor discovery was requested.
    #[error("no changelog given: pass --file <path> or --auto")]
    MissingFile,

    /// Discovery found no changelog.
    #[error("no changelog.md found under '{0}'")]
    NotFound(PathBuf),

    /// The changelog could not be opened or read.
    #[error("could not open changelog '{path}': {reason}")]
    ReadChangelog {
        /// Path of the changelog.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (no file, unreadable file or bad configuration).
    StartupFailure = 1,
    /// Validation failed (structural, extraction or per-release violations).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Determines the exit code for a validation outcome.
///
/// Structural and extraction failures count as validation failures, as does
/// any violation in any release.
pub fn exit_code_for_outcome(outcome: &Result<ChangelogReport, ChangelogError>) -> ExitCode {
    match outcome {
        Ok(report) if report.is_ok() => ExitCode::Success,
        Ok(_) | Err(_) => ExitCode::ValidationFailed,
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the changelog file.
    pub changelog_path: PathBuf,
    /// Configuration passed to the validation engine.
    pub validator_config: ValidatorConfig,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let changelog_path = resolve_changelog_path(args)?;

        let mut validator_config = ValidatorConfig::new()
            .with_section_scope(args.section_scope.into())
            .with_version_ordering(args.version_ordering.into());

        if let Some(ref sections) = args.allowed_sections {
            let sections: Vec<&str> = sections
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            if sections.is_empty() {
                return Err(ConfigError::Invalid(
                    "--allowed-sections must name at least one section".to_string(),
                ));
            }
            validator_config = validator_config.with_allowed_sections(sections);
        }

        Ok(Self {
            changelog_path,
            validator_config,
        })
    }

    /// Reads the changelog into memory.
    pub fn read_changelog(&self) -> Result<String, ConfigError> {
        fs::read_to_string(&self.changelog_path).map_err(|e| ConfigError::ReadChangelog {
            path: self.changelog_path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Picks the changelog from `--file`, or discovers one with `--auto`.
fn resolve_changelog_path(args: &Args) -> Result<PathBuf, ConfigError> {
    if let Some(ref file) = args.file {
        return Ok(file.clone());
    }

    if !args.auto {
        return Err(ConfigError::MissingFile);
    }

    let metadata =
        fs::metadata(&args.root).map_err(|_| ConfigError::NotFound(args.root.clone()))?;
    if !metadata.is_dir() {
        return Err(ConfigError::Invalid(format!(
            "root '{}' is not a directory",
            args.root.display()
        )));
    }

    find_changelog_file(&args.root).ok_or_else(|| ConfigError::NotFound(args.root.clone()))
}
