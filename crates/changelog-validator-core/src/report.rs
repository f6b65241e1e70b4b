//! End-to-end validation of a changelog document.
//!
//! [`validate_changelog`] runs the structural scanner, extracts releases and
//! validates each of them, collecting the violations per release.

use crate::config::ValidatorConfig;
use crate::parse::{ExtractError, Release, extract_releases};
use crate::scan::{StructuralError, scan_structure};
use crate::validate::{ValidationResult, validate_release};
use log::info;
use thiserror::Error;

/// A failure that prevents per-release validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChangelogError {
    /// The document failed a structural check.
    #[error("invalid changelog format: {0}")]
    Structural(#[from] StructuralError),

    /// Releases could not be extracted.
    #[error("could not parse changelog: {0}")]
    Extraction(#[from] ExtractError),
}

/// Validation outcome for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    /// The validated release.
    pub release: Release,
    /// Violations found in the release.
    pub result: ValidationResult,
}

impl ReleaseReport {
    /// Creates a new release report.
    pub fn new(release: Release, result: ValidationResult) -> Self {
        Self { release, result }
    }

    /// Returns the release version.
    pub fn version(&self) -> &str {
        &self.release.version
    }

    /// Returns the release date.
    pub fn date(&self) -> &str {
        &self.release.date
    }

    /// Returns the 1-based line of the release heading.
    pub fn line(&self) -> usize {
        self.release.line
    }

    /// Returns true if the release has no violations.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Validation outcome for a whole document, one entry per release in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogReport {
    /// Per-release reports.
    pub releases: Vec<ReleaseReport>,
}

impl ChangelogReport {
    /// Returns true if every release is valid.
    pub fn is_ok(&self) -> bool {
        self.releases.iter().all(ReleaseReport::is_ok)
    }

    /// Returns true if any release has violations.
    pub fn has_errors(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the total number of violations across all releases.
    pub fn total_errors(&self) -> usize {
        self.releases.iter().map(|r| r.result.errors.len()).sum()
    }

    /// Returns the reports of releases with violations.
    pub fn failing(&self) -> impl Iterator<Item = &ReleaseReport> {
        self.releases.iter().filter(|r| !r.is_ok())
    }
}

/// Validates a changelog document.
///
/// Structural checks run first and stop at the first violation. Releases are
/// then extracted and each one is validated with every built-in check.
///
/// # Errors
///
/// Returns [`ChangelogError::Structural`] if the document shape is invalid and
/// [`ChangelogError::Extraction`] if releases cannot be extracted. Per-release
/// violations are reported in the returned [`ChangelogReport`].
pub fn validate_changelog(
    input: &str,
    config: &ValidatorConfig,
) -> Result<ChangelogReport, ChangelogError> {
    scan_structure(input, config)?;
    let releases = extract_releases(input, config)?;

    let releases: Vec<ReleaseReport> = releases
        .into_iter()
        .map(|release| {
            let result = validate_release(&release, config);
            ReleaseReport::new(release, result)
        })
        .collect();

    let report = ChangelogReport { releases };
    info!(
        "Validated {} release(s): {} violation(s)",
        report.releases.len(),
        report.total_errors()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionScope;

    const VALID: &str = "# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

## [2.0.0] - 2024-01-01

### Added
- New API

### Removed
- Old API

## [1.0.0] - 2023-01-01

### Added
- Initial release
";

    #[test]
    fn valid_changelog() {
        let report = validate_changelog(VALID, &ValidatorConfig::default()).unwrap();
        assert_eq!(report.releases.len(), 2);
        assert_eq!(report.releases[0].version(), "2.0.0");
        assert_eq!(report.releases[1].version(), "1.0.0");
        assert_eq!(report.releases[1].date(), "2023-01-01");
        assert_eq!(report.releases[0].line(), 7);
        assert!(report.is_ok());
        assert!(!report.has_errors());
        assert_eq!(report.total_errors(), 0);
    }

    #[test]
    fn leading_bom_accepted() {
        let input = format!("\u{feff}{VALID}");
        let report = validate_changelog(&input, &ValidatorConfig::default()).unwrap();
        assert_eq!(report.releases.len(), 2);
        assert!(report.is_ok());
    }

    #[test]
    fn structural_failure_stops_validation() {
        let input = VALID.replace("# Changelog", "# History");
        assert_eq!(
            validate_changelog(&input, &ValidatorConfig::default()),
            Err(ChangelogError::Structural(StructuralError::MissingTitle))
        );
    }

    #[test]
    fn unknown_section_is_an_extraction_error() {
        let input = VALID.replace("### Removed", "### Security");
        let error = validate_changelog(&input, &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            ChangelogError::Extraction(ExtractError::UnknownSection { .. })
        ));
        assert!(error.to_string().starts_with("could not parse changelog"));
    }

    #[test]
    fn semantic_violations_are_collected_per_release() {
        let input = VALID.replace("## [1.0.0]", "## [01.0.0]");
        let report = validate_changelog(&input, &ValidatorConfig::default()).unwrap();
        assert!(report.has_errors());
        assert_eq!(report.total_errors(), 1);
        assert!(report.releases[0].is_ok());

        let failing: Vec<_> = report.failing().collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].version(), "01.0.0");
        assert_eq!(
            failing[0].result.messages(),
            vec!["Version 01.0.0 is not a valid semantic version."]
        );
    }

    #[test]
    fn document_scope_shares_sections() {
        let config = ValidatorConfig::default().with_section_scope(SectionScope::Document);
        let report = validate_changelog(VALID, &config).unwrap();
        assert!(report.is_ok());
        assert_eq!(
            report.releases[0].release.sections,
            report.releases[1].release.sections
        );
        assert_eq!(report.releases[1].release.entry_count(), 3);
    }

    #[test]
    fn validation_is_idempotent() {
        let input = VALID.replace("## [1.0.0]", "## [01.0.0]");
        let config = ValidatorConfig::default();
        assert_eq!(
            validate_changelog(&input, &config),
            validate_changelog(&input, &config)
        );
    }
}
