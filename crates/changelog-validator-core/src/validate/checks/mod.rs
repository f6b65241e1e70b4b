//! Check trait and runner for per-release validation.
//!
//! This module provides a trait-based system for implementing release
//! checks that can be composed and run together.

mod date;
mod links;
mod sections;
mod version;

pub use date::DateCheck;
pub use links::LinkReferenceCheck;
pub use sections::SectionsCheck;
pub use version::VersionCheck;

use crate::config::ValidatorConfig;
use crate::parse::Release;
use crate::validate::ValidationResult;
use log::trace;

/// Context provided to release checks.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// The release under validation.
    pub release: &'a Release,
    /// Configuration options.
    pub config: &'a ValidatorConfig,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(release: &'a Release, config: &'a ValidatorConfig) -> Self {
        Self { release, config }
    }
}

/// A validation check applied to one release.
pub trait Check: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check and returns validation results.
    fn run(&self, ctx: &CheckContext) -> ValidationResult;
}

/// Runs multiple checks against a release and collects the results.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates an empty check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with all built-in checks, in reporting order.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(VersionCheck::new());
        runner.add_check(DateCheck::new());
        runner.add_check(SectionsCheck::new());
        runner.add_check(LinkReferenceCheck::new());
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Returns the names of the registered checks.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Runs every check against the release and returns combined results.
    pub fn run(&self, release: &Release, config: &ValidatorConfig) -> ValidationResult {
        let ctx = CheckContext::new(release, config);
        let mut result = ValidationResult::new();

        for check in &self.checks {
            let check_result = check.run(&ctx);
            trace!(
                "Release {}: check '{}' found {} issue(s)",
                release.version,
                check.name(),
                check_result.errors.len()
            );
            result.merge(check_result);
        }

        result
    }
}

impl std::fmt::Debug for CheckRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRunner")
            .field("checks", &self.check_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;

    struct RequireEntries;

    impl Check for RequireEntries {
        fn name(&self) -> &'static str {
            "entries"
        }

        fn run(&self, ctx: &CheckContext) -> ValidationResult {
            let mut result = ValidationResult::new();
            if ctx.release.entry_count() == 0 {
                result.add_error(ValidationError::invalid_section(
                    &ctx.release.version,
                    "<empty>",
                    ctx.config.allowed_sections_display(),
                ));
            }
            result
        }
    }

    #[test]
    fn check_runner_creation() {
        let runner = CheckRunner::new();
        assert!(runner.checks.is_empty());
        let release = Release::new("bad", "", Vec::new(), 1);
        assert!(runner.run(&release, &ValidatorConfig::default()).is_ok());
    }

    #[test]
    fn check_runner_with_all_checks() {
        let runner = CheckRunner::with_all_checks();
        assert_eq!(
            runner.check_names(),
            vec!["version", "date", "sections", "links"]
        );
    }

    #[test]
    fn custom_check() {
        let mut runner = CheckRunner::new();
        runner.add_check(RequireEntries);

        let release = Release::new("1.0.0", "2024-01-01", Vec::new(), 1);
        let result = runner.run(&release, &ValidatorConfig::default());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn check_context_creation() {
        let release = Release::new("1.0.0", "2024-01-01", Vec::new(), 3);
        let config = ValidatorConfig::default();
        let ctx = CheckContext::new(&release, &config);
        assert_eq!(ctx.release.line, 3);
    }
}
