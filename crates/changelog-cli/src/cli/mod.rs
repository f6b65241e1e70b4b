//! CLI module for the changelog validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use changelog_validator_core::{SectionScope, VersionOrdering};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Changelog validator - validates Keep a Changelog documents.
///
/// Checks the document structure, then validates the version, date and
/// sections of every release.
#[derive(Parser, Debug)]
#[command(name = "changelog-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the changelog file.
    #[arg(long, short = 'f', env = "CHANGELOG_FILE", conflicts_with = "auto")]
    pub file: Option<PathBuf>,

    /// Search for a changelog.md file (any letter case) below --root.
    #[arg(long, short = 'a')]
    pub auto: bool,

    /// Directory searched by --auto.
    #[arg(long, env = "CHANGELOG_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Comma-separated list of allowed section labels.
    /// Defaults to: Added, Changed, Fixed, Deprecated, Removed
    #[arg(long, env = "CHANGELOG_ALLOWED_SECTIONS", value_delimiter = ',')]
    pub allowed_sections: Option<Vec<String>>,

    /// Which sections are attributed to each release.
    #[arg(long, env = "CHANGELOG_SECTION_SCOPE", default_value = "release")]
    pub section_scope: ScopeArg,

    /// How release versions are ordered by the structural check.
    #[arg(long, env = "CHANGELOG_VERSION_ORDERING", default_value = "lexicographic")]
    pub version_ordering: OrderingArg,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Section scope choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScopeArg {
    /// Each release owns the sections below its heading.
    #[default]
    Release,
    /// Every release shares all sections in the document.
    Document,
}

impl From<ScopeArg> for SectionScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Release => SectionScope::Release,
            ScopeArg::Document => SectionScope::Document,
        }
    }
}

/// Version ordering choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrderingArg {
    /// Compare version text character by character.
    #[default]
    Lexicographic,
    /// Compare major, minor and patch numerically.
    Semantic,
}

impl From<OrderingArg> for VersionOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Lexicographic => VersionOrdering::Lexicographic,
            OrderingArg::Semantic => VersionOrdering::Semantic,
        }
    }
}
