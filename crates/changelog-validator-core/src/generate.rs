//! Random changelog generation for benchmarking and testing.
//!
//! Generated documents always pass structural and per-release validation
//! with the default [`ValidatorConfig`](crate::ValidatorConfig).

use crate::config::DEFAULT_ALLOWED_SECTIONS;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Write;

/// Months between the first and last generated release cannot exceed this,
/// so every year keeps four digits.
const MAX_RELEASES: usize = 24_000;

/// Year and month of the newest generated release.
const START_YEAR: usize = 2025;
const START_MONTH: usize = 12;

/// Configuration for generating changelogs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of dated releases to generate.
    pub num_releases: usize,
    /// Maximum sections per release (1-5).
    pub max_sections_per_release: usize,
    /// Maximum entries per section.
    pub max_entries_per_section: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_releases: 50,
            max_sections_per_release: 3,
            max_entries_per_section: 4,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with the given number of releases.
    pub fn new(num_releases: usize) -> Self {
        Self {
            num_releases,
            ..Default::default()
        }
    }

    /// Small fixture (~10 releases).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 releases).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 releases).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Generate a document targeting approximately the given byte size.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average release is ~250 bytes
        Self::new(bytes.saturating_div(250).max(2))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum sections per release.
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections_per_release = max.clamp(1, DEFAULT_ALLOWED_SECTIONS.len());
        self
    }

    /// Set the maximum entries per section.
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries_per_section = max.max(1);
        self
    }
}

mod vocabulary {
    pub const VERBS: &[&str] = &[
        "Support", "Handle", "Document", "Improve", "Rework", "Expose", "Drop", "Guard",
    ];
    pub const SUBJECTS: &[&str] = &[
        "the config loader",
        "release notes",
        "CLI flags",
        "error messages",
        "the parser",
        "Windows paths",
        "the cache",
        "unicode input",
    ];
    pub const SUFFIXES: &[&str] = &["", " in strict mode", " on startup", " for large files"];
}

/// Returns the version of the `index`-th release from the top.
///
/// Majors share one digit count and decrease down the document, so both
/// lexicographic and numeric ordering hold.
fn version(index: usize, total: usize, rng: &mut StdRng) -> String {
    let width = total.to_string().len() as u32;
    let major = 10usize.pow(width) + (total - 1 - index);
    format!(
        "{}.{}.{}",
        major,
        rng.random_range(0..10),
        rng.random_range(0..10)
    )
}

/// Returns the date of the `index`-th release, one month older per release.
fn date(index: usize, rng: &mut StdRng) -> String {
    let months = START_YEAR * 12 + (START_MONTH - 1) - index;
    format!(
        "{:04}-{:02}-{:02}",
        months / 12,
        months % 12 + 1,
        rng.random_range(1..=28)
    )
}

fn entry(rng: &mut StdRng) -> String {
    use vocabulary::*;

    format!(
        "{} {}{}",
        VERBS[rng.random_range(0..VERBS.len())],
        SUBJECTS[rng.random_range(0..SUBJECTS.len())],
        SUFFIXES[rng.random_range(0..SUFFIXES.len())]
    )
}

/// Writes the sections of one release.
fn write_sections(out: &mut String, config: &GeneratorConfig, rng: &mut StdRng) {
    let max_sections = config
        .max_sections_per_release
        .clamp(1, DEFAULT_ALLOWED_SECTIONS.len());
    let num_sections = rng.random_range(1..=max_sections);
    let first = rng.random_range(0..DEFAULT_ALLOWED_SECTIONS.len());

    for offset in 0..num_sections {
        let label = DEFAULT_ALLOWED_SECTIONS[(first + offset) % DEFAULT_ALLOWED_SECTIONS.len()];
        let _ = writeln!(out, "### {}", label);
        let num_entries = rng.random_range(1..=config.max_entries_per_section.max(1));
        for _ in 0..num_entries {
            let _ = writeln!(out, "- {}", entry(rng));
        }
        out.push('\n');
    }
}

/// Generates a changelog document as a string.
///
/// At least two releases are always generated.
pub fn generate(config: &GeneratorConfig) -> String {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let total = config.num_releases.clamp(2, MAX_RELEASES);
    let mut out = String::with_capacity(total * 256);

    out.push_str("# Changelog\n\n");
    out.push_str("All notable changes to this project will be documented in this file.\n\n");
    out.push_str("## [Unreleased]\n\n");

    let mut versions = Vec::with_capacity(total);
    for index in 0..total {
        let version = version(index, total, &mut rng);
        let _ = writeln!(out, "## [{}] - {}\n", version, date(index, &mut rng));
        write_sections(&mut out, config, &mut rng);
        versions.push(version);
    }

    for pair in versions.windows(2) {
        let _ = writeln!(
            out,
            "[{}]: https://example.com/compare/v{}...v{}",
            pair[0], pair[1], pair[0]
        );
    }
    out
}
