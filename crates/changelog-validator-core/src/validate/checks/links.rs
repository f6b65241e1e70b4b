//! Link reference check.

use super::{Check, CheckContext};
use crate::validate::ValidationResult;
use crate::validate::semantic::validate_links;

/// A check that a linked version has a matching reference definition.
///
/// Reference definitions are not resolved yet, so the check always passes.
#[derive(Debug, Clone, Default)]
pub struct LinkReferenceCheck;

impl LinkReferenceCheck {
    /// Creates a new link reference check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for LinkReferenceCheck {
    fn name(&self) -> &'static str {
        "links"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        validate_links(ctx.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::parse::Release;

    #[test]
    fn always_passes() {
        let release = Release::new("not a version", "", Vec::new(), 1);
        let config = ValidatorConfig::new();
        let result = LinkReferenceCheck::new().run(&CheckContext::new(&release, &config));
        assert!(result.is_ok());
    }
}
