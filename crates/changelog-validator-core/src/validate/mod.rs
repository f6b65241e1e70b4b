//! Validation module for extracted releases.
//!
//! This module provides validation rules that are applied to each
//! extracted release to detect grammar and vocabulary issues.
//!
//! # Example
//!
//! ```rust
//! use changelog_validator_core::ValidatorConfig;
//! use changelog_validator_core::parse::Release;
//! use changelog_validator_core::validate::validate_release;
//!
//! let release = Release::new("1.2", "2024-01-01", Vec::new(), 1);
//! let result = validate_release(&release, &ValidatorConfig::default());
//!
//! for error in &result.errors {
//!     eprintln!("{}", error);
//! }
//! assert!(result.has_errors());
//! ```

pub mod checks;
mod error;
mod semantic;

// Re-export public types
pub use error::{ValidationError, ValidationResult};
pub use semantic::{
    validate, validate_date, validate_links, validate_release, validate_sections,
    validate_version, verify_date, verify_links, verify_sections, verify_semver,
};
