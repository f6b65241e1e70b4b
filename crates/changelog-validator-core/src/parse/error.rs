//! Error types for release extraction.

use thiserror::Error;

/// An error that aborts release extraction for the whole document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A `### <label>` heading uses a label outside the allow-list.
    #[error("line {line}: section '{label}' is not allowed (allowed: {allowed})")]
    UnknownSection {
        /// The line number of the heading (1-based).
        line: usize,
        /// The offending label.
        label: String,
        /// The allowed labels, comma separated.
        allowed: String,
    },

    /// No `## [<version>] - <date>` heading was found.
    #[error("no dated release headings found")]
    NoReleases,
}

impl ExtractError {
    /// Creates an unknown section error.
    pub fn unknown_section(
        label: impl Into<String>,
        line: usize,
        allowed: impl Into<String>,
    ) -> Self {
        Self::UnknownSection {
            line,
            label: label.into(),
            allowed: allowed.into(),
        }
    }

    /// Returns the line number where this error occurred, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ExtractError::UnknownSection { line, .. } => Some(*line),
            ExtractError::NoReleases => None,
        }
    }
}
