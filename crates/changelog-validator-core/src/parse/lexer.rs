//! Token parsers for changelog documents.
//!
//! This module contains nom-based parsers for individual lines
//! (headings, bullets, link definitions) and for the version and date
//! tokens found in release headings.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till1, take_while_m_n, take_while1},
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, opt, recognize, rest, verify},
    multi::separated_list1,
};

/// Document title line.
pub const TITLE_LINE: &str = "# Changelog";

/// Prefix of the in-progress release heading.
pub const UNRELEASED_HEADING: &str = "## [Unreleased]";

/// Characters allowed in SemVer pre-release and build identifiers.
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Byte order mark some editors write at the start of UTF-8 files.
pub const BOM: char = '\u{feff}';

/// Drops one leading byte order mark, if present.
pub fn strip_bom(input: &str) -> &str {
    input.strip_prefix(BOM).unwrap_or(input)
}

/// Returns true if the line is the `# Changelog` title.
pub fn is_title_line(line: &str) -> bool {
    line.trim_end() == TITLE_LINE
}

/// Returns true if the line opens the `## [Unreleased]` release.
pub fn is_unreleased_line(line: &str) -> bool {
    line.trim().starts_with(UNRELEASED_HEADING)
}

/// Returns true if the line opens a level-2 heading (`## ...`).
pub fn is_release_level_heading(line: &str) -> bool {
    line.starts_with("## ")
}

/// Returns true if the line is any Markdown heading.
pub fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parses a `YYYY-MM-DD` digit shape at the start of the input.
///
/// Only the shape is checked; `2024-13-45` is accepted.
pub fn date_shape(input: &str) -> IResult<&str, &str> {
    recognize((
        take_while_m_n(4, 4, is_digit),
        char('-'),
        take_while_m_n(2, 2, is_digit),
        char('-'),
        take_while_m_n(2, 2, is_digit),
    ))
    .parse(input)
}

/// Parses a `major.minor.patch` version made of plain digit runs.
fn plain_version(input: &str) -> IResult<&str, &str> {
    recognize((digit1, char('.'), digit1, char('.'), digit1)).parse(input)
}

/// Parses a release heading in its strict form: `## [M.m.p] - YYYY-MM-DD`
/// with nothing after the date.
///
/// Returns the version and date text.
pub fn parse_release_heading(line: &str) -> IResult<&str, (&str, &str)> {
    all_consuming((tag("## ["), plain_version, tag("] - "), date_shape))
        .map(|(_, version, _, date)| (version, date))
        .parse(line)
}

/// Splits `<version>] - <date>...` at the first `] - ` that is followed by
/// a date.
///
/// Returns the version, the date and whatever follows the date.
fn split_heading_tail(input: &str) -> Option<(&str, &str, &str)> {
    input.match_indices("] - ").find_map(|(idx, separator)| {
        let (remaining, date) = date_shape(&input[idx + separator.len()..]).ok()?;
        Some((&input[..idx], date, remaining))
    })
}

/// Finds every loose release heading `## [<anything>] - <YYYY-MM-DD>` in a line.
///
/// Unlike [`parse_release_heading`], the version text is not constrained and
/// anything may surround the heading.
pub fn find_release_headings(line: &str) -> Vec<(&str, &str)> {
    const OPENER: &str = "## [";

    let mut found = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find(OPENER) {
        match split_heading_tail(&rest[start + OPENER.len()..]) {
            Some((version, date, remaining)) => {
                found.push((version, date));
                rest = remaining;
            }
            None => rest = &rest[start + 1..],
        }
    }
    found
}

/// Parses a section heading (`### <label>`) and returns the trimmed label.
pub fn parse_section_heading(line: &str) -> IResult<&str, &str> {
    (space0, tag("### "), rest)
        .map(|(_, _, label): (&str, &str, &str)| label.trim())
        .parse(line)
}

/// Parses a top-level bullet (`- <entry>`) and returns the entry text.
pub fn parse_bullet(line: &str) -> IResult<&str, &str> {
    (tag("- "), rest)
        .map(|(_, entry): (&str, &str)| entry.trim_end())
        .parse(line)
}

/// Parses the label of a Markdown link reference definition,
/// e.g. `1.0.0` in `[1.0.0]: https://example.com/compare/v0.9.0...v1.0.0`.
pub fn parse_link_definition(line: &str) -> IResult<&str, &str> {
    (space0, char('['), take_till1(|c: char| c == ']'), tag("]:"))
        .map(|(_, _, label, _): (&str, char, &str, &str)| label)
        .parse(line)
}

/// Returns true if the line is a Markdown link reference definition.
pub fn is_link_definition(line: &str) -> bool {
    parse_link_definition(line).is_ok()
}

/// Parses a SemVer numeric identifier: `0` or digits without a leading zero.
fn numeric_identifier(input: &str) -> IResult<&str, &str> {
    verify(digit1, |digits: &str| {
        digits == "0" || !digits.starts_with('0')
    })
    .parse(input)
}

/// Parses a pre-release identifier: alphanumerics and hyphens, where purely
/// numeric identifiers may not have leading zeros.
fn prerelease_identifier(input: &str) -> IResult<&str, &str> {
    verify(take_while1(is_identifier_char), |id: &str| {
        !id.bytes().all(|b| b.is_ascii_digit()) || id == "0" || !id.starts_with('0')
    })
    .parse(input)
}

/// Parses a complete SemVer 2.0.0 version at the start of the input.
pub fn semver(input: &str) -> IResult<&str, &str> {
    recognize((
        numeric_identifier,
        char('.'),
        numeric_identifier,
        char('.'),
        numeric_identifier,
        opt((char('-'), separated_list1(char('.'), prerelease_identifier))),
        opt((
            char('+'),
            separated_list1(char('.'), take_while1(is_identifier_char)),
        )),
    ))
    .parse(input)
}

/// Returns true if the whole input is a SemVer 2.0.0 version.
pub fn is_semver(version: &str) -> bool {
    all_consuming(semver).parse(version).is_ok()
}

/// Returns true if the input is non-empty and starts with a `YYYY-MM-DD` shape.
pub fn has_date_shape(date: &str) -> bool {
    !date.is_empty() && date_shape(date).is_ok()
}
