//! Configuration shared by the scanner, the extractor and the validator.

use std::cmp::Ordering;

/// Section labels permitted by the Keep a Changelog convention.
pub const DEFAULT_ALLOWED_SECTIONS: [&str; 5] =
    ["Added", "Changed", "Fixed", "Deprecated", "Removed"];

/// How `### <label>` sections are attributed to releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionScope {
    /// Sections belong to the release whose heading precedes them, up to the
    /// next level-2 heading.
    #[default]
    Release,
    /// Every release receives every section found in the document.
    Document,
}

/// How adjacent release versions are compared by the structural scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrdering {
    /// Plain string comparison, so `10.0.0` sorts below `9.0.0`.
    #[default]
    Lexicographic,
    /// Field-wise numeric comparison of `major.minor.patch`.
    Semantic,
}

impl VersionOrdering {
    /// Compares two `M.m.p` version strings.
    ///
    /// Semantic ordering compares each dot-separated field as an arbitrarily
    /// long unsigned integer; fields that are not digit runs fall back to
    /// string comparison.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            VersionOrdering::Lexicographic => left.cmp(right),
            VersionOrdering::Semantic => {
                let mut lhs = left.split('.');
                let mut rhs = right.split('.');
                loop {
                    match (lhs.next(), rhs.next()) {
                        (Some(a), Some(b)) => match compare_numeric(a, b) {
                            Ordering::Equal => continue,
                            other => return other,
                        },
                        (Some(_), None) => return Ordering::Greater,
                        (None, Some(_)) => return Ordering::Less,
                        (None, None) => return Ordering::Equal,
                    }
                }
            }
        }
    }
}

/// Compares digit runs numerically without parsing them into a fixed-width integer.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(a) || !is_number(b) {
        return a.cmp(b);
    }
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Configuration for validating a changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Section labels accepted under a release.
    pub allowed_sections: Vec<String>,
    /// How sections are attributed to releases during extraction.
    pub section_scope: SectionScope,
    /// How the scanner orders adjacent release versions.
    pub version_ordering: VersionOrdering,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            allowed_sections: DEFAULT_ALLOWED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            section_scope: SectionScope::default(),
            version_ordering: VersionOrdering::default(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a new configuration with the default allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the allowed section labels.
    pub fn with_allowed_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how sections are attributed to releases.
    pub fn with_section_scope(mut self, scope: SectionScope) -> Self {
        self.section_scope = scope;
        self
    }

    /// Sets how adjacent release versions are compared.
    pub fn with_version_ordering(mut self, ordering: VersionOrdering) -> Self {
        self.version_ordering = ordering;
        self
    }

    /// Returns true if `label` is one of the allowed section labels.
    pub fn is_allowed_section(&self, label: &str) -> bool {
        self.allowed_sections.iter().any(|allowed| allowed == label)
    }

    /// Returns the allowed labels joined for display, e.g. `Added, Changed`.
    pub fn allowed_sections_display(&self) -> String {
        self.allowed_sections.join(", ")
    }
}
