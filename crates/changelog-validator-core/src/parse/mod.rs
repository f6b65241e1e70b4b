//! Release extraction for changelog documents.
//!
//! This module turns the raw text of a Keep a Changelog document into
//! an ordered list of releases, each carrying its sections and entries.
//!
//! # Example
//!
//! ```rust
//! use changelog_validator_core::ValidatorConfig;
//! use changelog_validator_core::parse::extract_releases;
//!
//! let input = "\
//! ### [1.0.0] - 2024-01-01
//! #### Added
//! - First release
//! ";
//!
//! let releases = extract_releases(input, &ValidatorConfig::default()).unwrap();
//! assert_eq!(releases[0].version, "1.0.0");
//! assert_eq!(releases[0].sections[0].entries, vec!["First release"]);
//! ```

mod ast;
mod error;
pub mod lexer;
mod parser;

// Re-export public types
pub use ast::{Release, Section, UNRELEASED};
pub use error::ExtractError;
pub use parser::{extract, extract_releases};
