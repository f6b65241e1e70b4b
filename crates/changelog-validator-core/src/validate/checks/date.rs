//! Release date check.

use super::{Check, CheckContext};
use crate::validate::ValidationResult;
use crate::validate::semantic::validate_date;

/// A check that the release date starts with a `YYYY-MM-DD` shape.
#[derive(Debug, Clone, Default)]
pub struct DateCheck;

impl DateCheck {
    /// Creates a new date check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for DateCheck {
    fn name(&self) -> &'static str {
        "date"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        validate_date(ctx.release)
    }
}
