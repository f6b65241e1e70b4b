//! Version grammar check.

use super::{Check, CheckContext};
use crate::validate::ValidationResult;
use crate::validate::semantic::validate_version;

/// A check that the release version is a SemVer 2.0.0 version.
///
/// The `Unreleased` sentinel is exempt.
#[derive(Debug, Clone, Default)]
pub struct VersionCheck;

impl VersionCheck {
    /// Creates a new version check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for VersionCheck {
    fn name(&self) -> &'static str {
        "version"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        validate_version(ctx.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::parse::Release;

    fn run_check(version: &str) -> ValidationResult {
        let release = Release::new(version, "2024-01-01", Vec::new(), 1);
        let config = ValidatorConfig::new();
        VersionCheck::new().run(&CheckContext::new(&release, &config))
    }

    #[test]
    fn valid_versions() {
        assert!(run_check("1.0.0").is_ok());
        assert!(run_check("2.1.0-rc.1+build.5").is_ok());
        assert!(run_check("Unreleased").is_ok());
    }

    #[test]
    fn invalid_versions() {
        assert!(run_check("1.2").has_errors());
        assert!(run_check("v1.2.3").has_errors());
        assert!(run_check("1.2.03").has_errors());
    }
}
