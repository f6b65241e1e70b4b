//! Error types for per-release validation.
//!
//! This module defines the violations found when checking a single
//! extracted release.

use thiserror::Error;

/// A violation found in a single release.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The version is not a SemVer 2.0.0 version.
    #[error("Version {version} is not a valid semantic version.")]
    InvalidVersion {
        /// The release version.
        version: String,
    },

    /// The release date does not start with `YYYY-MM-DD`.
    #[error("Version {version} has an invalid release date format.")]
    InvalidDate {
        /// The release version.
        version: String,
        /// The offending date text.
        date: String,
    },

    /// A section label is outside the allow-list.
    #[error("Version {version} contains an invalid section '{section}'. Valid sections are: {allowed}")]
    InvalidSection {
        /// The release version.
        version: String,
        /// The first offending section label.
        section: String,
        /// The allowed labels, comma separated.
        allowed: String,
    },

    /// The version has no link reference definition.
    #[error("Version {version} is linked, but no link reference found in the changelog.")]
    MissingLinkReference {
        /// The release version.
        version: String,
    },
}

impl ValidationError {
    /// Creates an invalid version error.
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self::InvalidDate {
            version: version.into(),
            date: date.into(),
        }
    }

    /// Creates an invalid section error.
    pub fn invalid_section(
        version: impl Into<String>,
        section: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::InvalidSection {
            version: version.into(),
            section: section.into(),
            allowed: allowed.into(),
        }
    }

    /// Creates a missing link reference error.
    pub fn missing_link_reference(version: impl Into<String>) -> Self {
        Self::MissingLinkReference {
            version: version.into(),
        }
    }

    /// Returns the version of the release this error belongs to.
    pub fn version(&self) -> &str {
        match self {
            ValidationError::InvalidVersion { version } => version,
            ValidationError::InvalidDate { version, .. } => version,
            ValidationError::InvalidSection { version, .. } => version,
            ValidationError::MissingLinkReference { version } => version,
        }
    }
}

/// The result of validating one release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// All violations found, in check order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if validation passed with no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Returns the human-readable message of every error.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
