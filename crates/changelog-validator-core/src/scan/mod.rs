//! Document-wide structural checks.
//!
//! The scanner runs before any release is extracted. It stops at the first
//! violated check:
//!
//! 1. a `# Changelog` title line exists
//! 2. a `## [Unreleased]` line exists
//! 3. every other level-2 heading reads exactly `## [M.m.p] - YYYY-MM-DD`
//! 4. there are at least two dated releases
//! 5. versions strictly decrease and dates never increase down the document

mod error;

pub use error::StructuralError;

use crate::config::ValidatorConfig;
use crate::parse::lexer::{
    is_title_line, is_unreleased_line, parse_release_heading, strip_bom,
};
use log::{debug, trace};
use std::cmp::Ordering;

/// A `## [M.m.p] - YYYY-MM-DD` heading that passed the shape check.
#[derive(Debug, Clone, Copy)]
struct DatedHeading<'a> {
    version: &'a str,
    date: &'a str,
    line: usize,
}

/// Returns true if the line must be a dated release heading.
fn is_dated_heading_candidate(line: &str) -> bool {
    line.starts_with("##") && !line.contains("[Unreleased]") && !line.contains("###")
}

/// Checks heading shapes and collects the dated release headings.
fn dated_headings(input: &str) -> Result<Vec<DatedHeading<'_>>, StructuralError> {
    let mut headings = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if !is_dated_heading_candidate(line) {
            continue;
        }
        match parse_release_heading(line.trim()) {
            Ok((_, (version, date))) => {
                trace!("Line {}: dated release {} ({})", idx + 1, version, date);
                headings.push(DatedHeading {
                    version,
                    date,
                    line: idx + 1,
                });
            }
            Err(_) => {
                debug!("Line {}: malformed release heading", idx + 1);
                return Err(StructuralError::malformed_heading(line, idx + 1));
            }
        }
    }
    Ok(headings)
}

/// Checks that each release is older than the one above it.
fn check_ordering(
    headings: &[DatedHeading<'_>],
    config: &ValidatorConfig,
) -> Result<(), StructuralError> {
    for pair in headings.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        if config
            .version_ordering
            .compare(current.version, previous.version)
            != Ordering::Less
        {
            return Err(StructuralError::version_order(
                current.version,
                previous.version,
                current.line,
            ));
        }

        // Dates share the fixed YYYY-MM-DD shape, so string order is date order.
        if current.date > previous.date {
            return Err(StructuralError::date_order(
                current.date,
                previous.date,
                current.line,
            ));
        }
    }
    Ok(())
}

/// Runs every structural check, returning the first violation.
pub fn scan_structure(input: &str, config: &ValidatorConfig) -> Result<(), StructuralError> {
    let input = strip_bom(input);
    debug!(
        "Scanning changelog structure ({} bytes, ordering={:?})",
        input.len(),
        config.version_ordering
    );

    if !input.lines().any(is_title_line) {
        return Err(StructuralError::MissingTitle);
    }

    if !input.lines().any(is_unreleased_line) {
        return Err(StructuralError::MissingUnreleased);
    }

    let headings = dated_headings(input)?;
    if headings.len() < 2 {
        return Err(StructuralError::InsufficientReleases {
            found: headings.len(),
        });
    }

    check_ordering(&headings, config)?;

    debug!("Structure is valid: {} dated release(s)", headings.len());
    Ok(())
}

/// Returns true if the document passes every structural check.
pub fn scan(input: &str, config: &ValidatorConfig) -> bool {
    match scan_structure(input, config) {
        Ok(()) => true,
        Err(error) => {
            debug!("Structural check failed: {}", error);
            false
        }
    }
}
