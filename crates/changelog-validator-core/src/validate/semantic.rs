//! Per-release validation rules.
//!
//! Each `verify_*` function is a pure predicate over one part of a release.
//! [`validate_release`] runs all of them and collects the violations.

use super::checks::CheckRunner;
use super::error::{ValidationError, ValidationResult};
use crate::config::ValidatorConfig;
use crate::parse::lexer::{has_date_shape, is_semver};
use crate::parse::{Release, Section};
use log::debug;

/// Returns true if `version` is a SemVer 2.0.0 version.
pub fn verify_semver(version: &str) -> bool {
    is_semver(version)
}

/// Returns true if `date` is non-empty and starts with a `YYYY-MM-DD` shape.
///
/// Calendar validity is not checked.
pub fn verify_date(date: &str) -> bool {
    has_date_shape(date)
}

/// Returns the first section whose label is outside the allow-list.
pub fn verify_sections<'a>(
    sections: &'a [Section],
    config: &ValidatorConfig,
) -> Option<&'a Section> {
    sections
        .iter()
        .find(|section| !config.is_allowed_section(&section.label))
}

/// Returns true if a release's link reference requirement is satisfied.
///
/// Link reference definitions are not resolved, so this always passes.
pub fn verify_links(_has_link_reference: bool) -> bool {
    true
}

/// Validates the version of a release.
pub fn validate_version(release: &Release) -> ValidationResult {
    let mut result = ValidationResult::new();
    if !release.is_unreleased() && !verify_semver(&release.version) {
        result.add_error(ValidationError::invalid_version(&release.version));
    }
    result
}

/// Validates the date of a release.
pub fn validate_date(release: &Release) -> ValidationResult {
    let mut result = ValidationResult::new();
    if !verify_date(&release.date) {
        result.add_error(ValidationError::invalid_date(&release.version, &release.date));
    }
    result
}

/// Validates the section labels of a release, reporting the first offender only.
pub fn validate_sections(release: &Release, config: &ValidatorConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some(section) = verify_sections(&release.sections, config) {
        result.add_error(ValidationError::invalid_section(
            &release.version,
            &section.label,
            config.allowed_sections_display(),
        ));
    }
    result
}

/// Validates the link reference of a release.
pub fn validate_links(release: &Release) -> ValidationResult {
    let mut result = ValidationResult::new();
    if !verify_links(release.has_link_reference()) {
        result.add_error(ValidationError::missing_link_reference(&release.version));
    }
    result
}

/// Runs every built-in check against a release.
pub fn validate_release(release: &Release, config: &ValidatorConfig) -> ValidationResult {
    let result = CheckRunner::with_all_checks().run(release, config);
    debug!(
        "Release {}: {} violation(s)",
        release.version,
        result.errors.len()
    );
    result
}

/// Validates a release and returns the violation messages.
///
/// An empty list means the release is valid.
pub fn validate(release: &Release, config: &ValidatorConfig) -> Vec<String> {
    validate_release(release, config).messages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::UNRELEASED;

    fn release(version: &str, date: &str, labels: &[&str]) -> Release {
        let sections = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| Section::new(*label, vec!["Entry".to_string()], idx + 2))
            .collect();
        Release::new(version, date, sections, 1)
    }

    #[test]
    fn valid_release() {
        let release = release("1.0.0", "2023-01-01", &["Added", "Fixed"]);
        assert!(validate(&release, &ValidatorConfig::default()).is_empty());
    }

    #[test]
    fn incomplete_version() {
        let release = release("1.2", "2023-01-01", &["Added"]);
        assert_eq!(
            validate(&release, &ValidatorConfig::default()),
            vec!["Version 1.2 is not a valid semantic version."]
        );
    }

    #[test]
    fn trailing_text_after_version_rejected() {
        let release = release("1.2.3 beta", "2023-01-01", &[]);
        let result = validate_version(&release);
        assert!(matches!(
            result.errors.as_slice(),
            [ValidationError::InvalidVersion { version }] if version == "1.2.3 beta"
        ));
    }

    #[test]
    fn unreleased_is_exempt_from_semver() {
        let release = release(UNRELEASED, "2023-01-01", &[]);
        assert!(validate_version(&release).is_ok());
    }

    #[test]
    fn calendar_invalid_date_passes_shape_check() {
        let release = release("1.0.0", "2024-13-45", &["Added"]);
        assert!(verify_date("2024-13-45"));
        assert!(validate(&release, &ValidatorConfig::default()).is_empty());
    }

    #[test]
    fn empty_date_rejected() {
        let release = release("1.0.0", "", &[]);
        assert_eq!(
            validate(&release, &ValidatorConfig::default()),
            vec!["Version 1.0.0 has an invalid release date format."]
        );
    }

    #[test]
    fn first_invalid_section_reported() {
        let release = release("1.0.0", "2023-01-01", &["Added", "Security", "Other"]);
        let result = validate_sections(&release, &ValidatorConfig::default());
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            &result.errors[0],
            ValidationError::InvalidSection { section, .. } if section == "Security"
        ));
    }

    #[test]
    fn every_check_runs() {
        let release = release("1.2", "yesterday", &["Security"]);
        let messages = validate(&release, &ValidatorConfig::default());
        assert_eq!(
            messages,
            vec![
                "Version 1.2 is not a valid semantic version.",
                "Version 1.2 has an invalid release date format.",
                "Version 1.2 contains an invalid section 'Security'. \
                 Valid sections are: Added, Changed, Fixed, Deprecated, Removed",
            ]
        );
    }

    #[test]
    fn link_check_always_passes() {
        assert!(verify_links(true));
        assert!(verify_links(false));
        let release = release("1.0.0", "2023-01-01", &[]);
        assert!(validate_links(&release).is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let release = release("01.0.0", "2023-1-1", &["Security"]);
        let config = ValidatorConfig::default();
        assert_eq!(validate(&release, &config), validate(&release, &config));
    }
}
