//! Section label check.

use super::{Check, CheckContext};
use crate::validate::ValidationResult;
use crate::validate::semantic::validate_sections;

/// A check that every section label is in the configured allow-list.
#[derive(Debug, Clone, Default)]
pub struct SectionsCheck;

impl SectionsCheck {
    /// Creates a new sections check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for SectionsCheck {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        validate_sections(ctx.release, ctx.config)
    }
}
