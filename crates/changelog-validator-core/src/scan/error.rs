//! Error types for document-wide structural checks.

use thiserror::Error;

/// A document-wide shape violation found by the structural scanner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// No `# Changelog` line.
    #[error("no '# Changelog' header found")]
    MissingTitle,

    /// No `## [Unreleased]` line.
    #[error("'## [Unreleased]' section is missing from the changelog")]
    MissingUnreleased,

    /// A level-2 heading that is not `## [M.m.p] - YYYY-MM-DD`.
    #[error("line {line}: format not allowed: '{text}' (expected '## [M.m.p] - YYYY-MM-DD')")]
    MalformedHeading {
        /// The line number (1-based).
        line: usize,
        /// The offending heading text.
        text: String,
    },

    /// Fewer than two dated releases.
    #[error(
        "versions need to be defined with a release date in the format 'YYYY-MM-DD' \
         (found {found} dated release(s), at least 2 required)"
    )]
    InsufficientReleases {
        /// How many dated releases were found.
        found: usize,
    },

    /// A version is not lower than the release above it.
    #[error("line {line}: versions are not in descending order: {version} follows {previous}")]
    VersionOrder {
        /// The line number of the later heading (1-based).
        line: usize,
        /// The version on this line.
        version: String,
        /// The version of the release above.
        previous: String,
    },

    /// A date is later than the release above it.
    #[error("line {line}: dates are not in chronological order: {date} follows {previous}")]
    DateOrder {
        /// The line number of the later heading (1-based).
        line: usize,
        /// The date on this line.
        date: String,
        /// The date of the release above.
        previous: String,
    },
}

impl StructuralError {
    /// Creates a malformed heading error.
    pub fn malformed_heading(text: impl Into<String>, line: usize) -> Self {
        Self::MalformedHeading {
            line,
            text: text.into(),
        }
    }

    /// Creates a version order error.
    pub fn version_order(
        version: impl Into<String>,
        previous: impl Into<String>,
        line: usize,
    ) -> Self {
        Self::VersionOrder {
            line,
            version: version.into(),
            previous: previous.into(),
        }
    }

    /// Creates a date order error.
    pub fn date_order(date: impl Into<String>, previous: impl Into<String>, line: usize) -> Self {
        Self::DateOrder {
            line,
            date: date.into(),
            previous: previous.into(),
        }
    }

    /// Returns the line number where this error occurred, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            StructuralError::MalformedHeading { line, .. } => Some(*line),
            StructuralError::VersionOrder { line, .. } => Some(*line),
            StructuralError::DateOrder { line, .. } => Some(*line),
            StructuralError::MissingTitle
            | StructuralError::MissingUnreleased
            | StructuralError::InsufficientReleases { .. } => None,
        }
    }
}
