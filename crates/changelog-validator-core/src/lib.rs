//! Changelog Validator Core
//!
//! A library for checking changelogs written in the
//! [Keep a Changelog](https://keepachangelog.com/en/1.0.0/) format.
//!
//! # Features
//!
//! - **Scanner**: Document-wide structure checks (title, Unreleased marker,
//!   heading shape, release ordering)
//! - **Extractor**: Split the document into releases and their sections
//! - **Validation**: Per-release semantic version, date and section checks
//! - **Pluggable checks**: Add custom per-release checks through [`Check`]
//!
//! # Quick Start
//!
//! ```rust
//! use changelog_validator_core::{ValidatorConfig, validate_changelog};
//!
//! let input = "# Changelog
//!
//! ## [Unreleased]
//!
//! ## [2.0.0] - 2024-01-01
//!
//! ### Added
//! - New API
//!
//! ## [1.0.0] - 2023-01-01
//!
//! ### Added
//! - Initial release
//! ";
//!
//! match validate_changelog(input, &ValidatorConfig::default()) {
//!     Ok(report) => {
//!         for release in &report.releases {
//!             if release.is_ok() {
//!                 println!("Version {} is valid.", release.version());
//!             } else {
//!                 for message in release.result.messages() {
//!                     eprintln!("- {}", message);
//!                 }
//!             }
//!         }
//!         assert!(report.is_ok());
//!     }
//!     Err(error) => eprintln!("{}", error),
//! }
//! ```
//!
//! # Modules
//!
//! - [`scan`]: Structural scanner
//! - [`parse`]: Release extractor and section parser
//! - [`validate`]: Per-release validation rules

pub mod config;
mod discover;
pub mod parse;
mod report;
pub mod scan;
pub mod validate;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use config::{DEFAULT_ALLOWED_SECTIONS, SectionScope, ValidatorConfig, VersionOrdering};
pub use discover::{CHANGELOG_FILE_NAME, find_changelog_file, is_changelog_name};
pub use parse::{ExtractError, Release, Section, extract, extract_releases};
pub use report::{ChangelogError, ChangelogReport, ReleaseReport, validate_changelog};
pub use scan::{StructuralError, scan, scan_structure};
pub use validate::checks::{Check, CheckContext, CheckRunner};
pub use validate::{ValidationError, ValidationResult, validate, validate_release};
