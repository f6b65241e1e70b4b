//! Release extraction for changelog documents.
//!
//! This module combines the lexer components to turn a whole document
//! into an ordered list of [`Release`] records.

use super::ast::{Release, Section};
use super::error::ExtractError;
use super::lexer::{
    find_release_headings, is_heading, is_link_definition, is_release_level_heading,
    parse_bullet, parse_section_heading, strip_bom,
};
use crate::config::{SectionScope, ValidatorConfig};
use log::{debug, trace};

/// A release heading found during the first pass.
#[derive(Debug, Clone, Copy)]
struct ReleaseHeading<'a> {
    version: &'a str,
    date: &'a str,
    /// Index into the document lines (0-based).
    index: usize,
}

/// Accumulates the body of a section while its lines are scanned.
#[derive(Debug)]
struct SectionBuilder {
    label: String,
    line: usize,
    entries: Vec<String>,
}

impl SectionBuilder {
    fn new(label: &str, line: usize) -> Self {
        Self {
            label: label.to_string(),
            line,
            entries: Vec::new(),
        }
    }

    /// Adds a body line: bullets open a new entry, other text continues the
    /// previous one.
    fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Ok((_, entry)) = parse_bullet(line) {
            self.entries.push(entry.to_string());
            return;
        }
        match self.entries.last_mut() {
            Some(entry) => {
                entry.push('\n');
                entry.push_str(line.trim());
            }
            None => self.entries.push(line.trim().to_string()),
        }
    }

    fn finish(self) -> Section {
        Section::new(self.label, self.entries, self.line)
    }
}

/// Parses every `### <label>` section in `lines`.
///
/// A section body ends at the next heading, at a link reference definition
/// or at the end of `lines`. `first_line` is the 1-based line number of
/// `lines[0]`.
fn parse_sections(lines: &[&str], first_line: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<SectionBuilder> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Ok((_, label)) = parse_section_heading(line) {
            sections.extend(current.take().map(SectionBuilder::finish));
            current = Some(SectionBuilder::new(label, first_line + idx));
            continue;
        }

        let Some(section) = current.as_mut() else {
            continue;
        };

        if is_heading(line) || is_link_definition(line) {
            sections.extend(current.take().map(SectionBuilder::finish));
        } else {
            section.push_line(line);
        }
    }

    sections.extend(current.map(SectionBuilder::finish));
    sections
}

/// Rejects the document if any section label is outside the allow-list.
fn check_section_labels(lines: &[&str], config: &ValidatorConfig) -> Result<(), ExtractError> {
    for (idx, line) in lines.iter().enumerate() {
        if let Ok((_, label)) = parse_section_heading(line)
            && !config.is_allowed_section(label)
        {
            debug!("Line {}: section '{}' is not allowed", idx + 1, label);
            return Err(ExtractError::unknown_section(
                label,
                idx + 1,
                config.allowed_sections_display(),
            ));
        }
    }
    Ok(())
}

/// Finds every loose release heading in document order.
fn find_headings<'a>(lines: &[&'a str]) -> Vec<ReleaseHeading<'a>> {
    lines
        .iter()
        .copied()
        .enumerate()
        .flat_map(|(index, line)| {
            find_release_headings(line)
                .into_iter()
                .map(move |(version, date)| ReleaseHeading {
                    version,
                    date,
                    index,
                })
        })
        .collect()
}

/// Returns the index one past the last line belonging to the release whose
/// heading is at `heading_index`.
fn release_block_end(lines: &[&str], heading_index: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(heading_index + 1)
        .find(|(_, line)| is_release_level_heading(line))
        .map_or(lines.len(), |(idx, _)| idx)
}

/// Extracts releases from a changelog document.
///
/// Every line matching `## [<version>] - <YYYY-MM-DD>` yields one release.
/// How sections are attributed to releases depends on
/// [`ValidatorConfig::section_scope`].
///
/// # Errors
///
/// Returns [`ExtractError::UnknownSection`] if any `### <label>` heading in
/// the document uses a label outside the allow-list, and
/// [`ExtractError::NoReleases`] if no release heading is found.
pub fn extract_releases(
    input: &str,
    config: &ValidatorConfig,
) -> Result<Vec<Release>, ExtractError> {
    let input = strip_bom(input);
    debug!(
        "Extracting releases ({} bytes, scope={:?})",
        input.len(),
        config.section_scope
    );
    let lines: Vec<&str> = input.lines().collect();

    check_section_labels(&lines, config)?;

    let headings = find_headings(&lines);
    if headings.is_empty() {
        return Err(ExtractError::NoReleases);
    }

    let document_sections = match config.section_scope {
        SectionScope::Document => Some(parse_sections(&lines, 1)),
        SectionScope::Release => None,
    };

    let releases: Vec<Release> = headings
        .iter()
        .map(|heading| {
            let sections = match &document_sections {
                Some(sections) => sections.clone(),
                None => {
                    let start = heading.index + 1;
                    let end = release_block_end(&lines, heading.index);
                    parse_sections(&lines[start..end], start + 1)
                }
            };
            trace!(
                "Line {}: release {} with {} section(s)",
                heading.index + 1,
                heading.version,
                sections.len()
            );
            Release::new(heading.version, heading.date, sections, heading.index + 1)
        })
        .collect();

    debug!("Extraction complete: {} release(s)", releases.len());
    Ok(releases)
}

/// Extracts releases, returning an empty list on any extraction error.
///
/// An unknown section label and a document without releases both yield an
/// empty list; use [`extract_releases`] to tell them apart.
pub fn extract(input: &str, config: &ValidatorConfig) -> Vec<Release> {
    extract_releases(input, config).unwrap_or_else(|error| {
        debug!("Extraction failed: {}", error);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGELOG: &str = "# Changelog

## [Unreleased]

### Added
- Pending feature

## [2.0.0] - 2024-01-01

### Added
- New API
- Second entry
  spanning two lines

### Removed
- Old API

## [1.0.0] - 2023-01-01

### Fixed
- Crash on start

[2.0.0]: https://example.com/compare/v1.0.0...v2.0.0
[1.0.0]: https://example.com/releases/v1.0.0
";

    fn labels(release: &Release) -> Vec<&str> {
        release.sections.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn extracts_releases_in_order() {
        let releases = extract_releases(CHANGELOG, &ValidatorConfig::default()).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version, "2.0.0");
        assert_eq!(releases[0].date, "2024-01-01");
        assert_eq!(releases[0].line, 8);
        assert_eq!(releases[1].version, "1.0.0");
        assert_eq!(releases[1].date, "2023-01-01");
        assert_eq!(releases[1].line, 18);
    }

    #[test]
    fn release_scope_attributes_sections_to_their_release() {
        let releases = extract_releases(CHANGELOG, &ValidatorConfig::default()).unwrap();
        assert_eq!(labels(&releases[0]), vec!["Added", "Removed"]);
        assert_eq!(labels(&releases[1]), vec!["Fixed"]);

        let added = releases[0].section("Added").unwrap();
        assert_eq!(added.line, 10);
        assert_eq!(
            added.entries,
            vec!["New API", "Second entry\nspanning two lines"]
        );
    }

    #[test]
    fn link_definitions_end_the_last_section() {
        let releases = extract_releases(CHANGELOG, &ValidatorConfig::default()).unwrap();
        let fixed = releases[1].section("Fixed").unwrap();
        assert_eq!(fixed.entries, vec!["Crash on start"]);
    }

    #[test]
    fn document_scope_gives_every_release_every_section() {
        let config = ValidatorConfig::default().with_section_scope(SectionScope::Document);
        let releases = extract_releases(CHANGELOG, &config).unwrap();
        assert_eq!(releases.len(), 2);
        for release in &releases {
            assert_eq!(labels(release), vec!["Added", "Added", "Removed", "Fixed"]);
        }
        assert_eq!(releases[0].sections, releases[1].sections);
    }

    #[test]
    fn unknown_section_aborts_extraction() {
        let input = CHANGELOG.replace("### Removed", "### Security");
        let error = extract_releases(&input, &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            ExtractError::UnknownSection { ref label, line: 15, .. } if label == "Security"
        ));
        assert!(extract(&input, &ValidatorConfig::default()).is_empty());
    }

    #[test]
    fn unknown_section_under_unreleased_aborts_extraction() {
        let input = CHANGELOG.replacen("### Added", "### Security", 1);
        assert!(extract(&input, &ValidatorConfig::default()).is_empty());
    }

    #[test]
    fn custom_allow_list_accepts_extra_labels() {
        let input = CHANGELOG.replace("### Removed", "### Security");
        let config = ValidatorConfig::default()
            .with_allowed_sections(["Added", "Fixed", "Security"]);
        let releases = extract_releases(&input, &config).unwrap();
        assert_eq!(labels(&releases[0]), vec!["Added", "Security"]);
    }

    #[test]
    fn no_releases() {
        let input = "# Changelog\n\n## [Unreleased]\n\n### Added\n- Something\n";
        assert_eq!(
            extract_releases(input, &ValidatorConfig::default()),
            Err(ExtractError::NoReleases)
        );
        assert!(extract(input, &ValidatorConfig::default()).is_empty());
    }

    #[test]
    fn loose_headings_keep_raw_version_text() {
        let input = "## [1.2] - 2024-01-01\n### Added\n- x\n## [v2.0.0-rc.1] - 2024-02-01 [YANKED]\n";
        let releases = extract_releases(input, &ValidatorConfig::default()).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version, "1.2");
        assert_eq!(releases[0].entry_count(), 1);
        assert_eq!(releases[1].version, "v2.0.0-rc.1");
        assert!(releases[1].sections.is_empty());
    }

    #[test]
    fn text_before_first_bullet_is_an_entry() {
        let input = "## [1.0.0] - 2024-01-01\n### Changed\nFree text\n- Bullet\n";
        let releases = extract_releases(input, &ValidatorConfig::default()).unwrap();
        let changed = releases[0].section("Changed").unwrap();
        assert_eq!(changed.entries, vec!["Free text", "Bullet"]);
    }

    #[test]
    fn crlf_line_endings() {
        let input = CHANGELOG.replace('\n', "\r\n");
        let releases = extract_releases(&input, &ValidatorConfig::default()).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(labels(&releases[0]), vec!["Added", "Removed"]);
        assert_eq!(releases[0].section("Removed").unwrap().entries, vec!["Old API"]);
    }

    #[test]
    fn leading_bom_ignored() {
        let input = format!("\u{feff}{CHANGELOG}");
        let releases = extract_releases(&input, &ValidatorConfig::default()).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].line, 8);
    }
}
