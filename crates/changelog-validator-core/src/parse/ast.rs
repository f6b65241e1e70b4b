//! Data structures for extracted changelog releases.
//!
//! Releases and sections keep the raw text found in the document; grammar
//! checks happen later in [`crate::validate`].

use std::fmt::{self, Display};

/// Version token that marks the in-progress release.
pub const UNRELEASED: &str = "Unreleased";

/// A category block within a release (e.g. `### Added`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The heading text after `### `, trimmed.
    pub label: String,
    /// Change descriptions, one per bullet, without the `- ` marker.
    pub entries: Vec<String>,
    /// Line number of the heading (1-based).
    pub line: usize,
}

impl Section {
    /// Creates a new section with the given label and entries.
    pub fn new(label: impl Into<String>, entries: Vec<String>, line: usize) -> Self {
        Self {
            label: label.into(),
            entries,
            line,
        }
    }
}

/// A dated entry in the change history, e.g. `## [1.2.0] - 2024-03-01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Raw version text between the brackets.
    pub version: String,
    /// Raw date text after ` - `.
    pub date: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Line number of the release heading (1-based).
    pub line: usize,
}

impl Release {
    /// Creates a new release.
    pub fn new(
        version: impl Into<String>,
        date: impl Into<String>,
        sections: Vec<Section>,
        line: usize,
    ) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            sections,
            line,
        }
    }

    /// Returns true if this is the `Unreleased` sentinel release.
    pub fn is_unreleased(&self) -> bool {
        self.version == UNRELEASED
    }

    /// Returns the section with the given label, if present.
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Returns the total number of change entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Returns true if the document links this version, i.e. it has a
    /// `[<version>]: <url>` reference definition.
    ///
    /// Reference definitions are not tracked, so every release counts as linked.
    pub fn has_link_reference(&self) -> bool {
        true
    }
}

impl Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] - {}", self.version, self.date)
    }
}
