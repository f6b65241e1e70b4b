//! Output formatting for the CLI.
//!
//! This module renders validation outcomes as human-readable console output.

use changelog_validator_core::{
    ChangelogError, ChangelogReport, ExtractError, ReleaseReport, StructuralError,
};
use colored::Colorize;
use std::io::Write;

/// Closing line printed after a structural diagnostic.
pub const FORMAT_INVALID: &str = "Changelog format is invalid.";

/// Closing line printed after an extraction diagnostic.
pub const PARSING_ISSUE: &str = "Issue with changelog parsing";

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the outcome of every release, in document order.
    pub fn write_report(&mut self, report: &ChangelogReport) -> std::io::Result<()> {
        for release in &report.releases {
            self.write_release(release)?;
        }
        Ok(())
    }

    /// Writes the outcome of one release.
    pub fn write_release(&mut self, release: &ReleaseReport) -> std::io::Result<()> {
        if release.is_ok() {
            return self.write_release_valid(release.version());
        }

        let header = format!("Errors found in version {}:", release.version());
        if self.use_colors {
            writeln!(self.writer, "{}", header.red().bold())?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }

        for message in release.result.messages() {
            writeln!(self.writer, "- {}", message)?;
        }
        Ok(())
    }

    /// Writes the success line of a release.
    pub fn write_release_valid(&mut self, version: &str) -> std::io::Result<()> {
        let message = format!("Version {} is valid.", version);
        if self.use_colors {
            writeln!(self.writer, "{}", message.green())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes a failure that stopped validation before any release was checked.
    pub fn write_changelog_error(&mut self, error: &ChangelogError) -> std::io::Result<()> {
        match error {
            ChangelogError::Structural(error) => self.write_structural_failure(error),
            ChangelogError::Extraction(error) => self.write_extraction_failure(error),
        }
    }

    /// Writes a structural diagnostic.
    pub fn write_structural_failure(&mut self, error: &StructuralError) -> std::io::Result<()> {
        self.write_diagnostic(&error.to_string())?;
        writeln!(self.writer, "{}", FORMAT_INVALID)
    }

    /// Writes an extraction diagnostic.
    pub fn write_extraction_failure(&mut self, error: &ExtractError) -> std::io::Result<()> {
        self.write_diagnostic(&error.to_string())?;
        writeln!(self.writer, "{}", PARSING_ISSUE)
    }

    fn write_diagnostic(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", message.yellow())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog_validator_core::{Release, ValidationError, ValidationResult};

    fn render(f: impl FnOnce(&mut HumanOutput<&mut Vec<u8>>) -> std::io::Result<()>) -> String {
        let mut buffer = Vec::new();
        let mut output = HumanOutput::new(&mut buffer, false);
        f(&mut output).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn release_report(version: &str, errors: Vec<ValidationError>) -> ReleaseReport {
        ReleaseReport::new(
            Release::new(version, "2024-01-01", Vec::new(), 1),
            ValidationResult::with_errors(errors),
        )
    }

    #[test]
    fn test_valid_release() {
        let out = render(|o| o.write_release(&release_report("1.0.0", Vec::new())));
        assert_eq!(out, "Version 1.0.0 is valid.\n");
    }

    #[test]
    fn test_release_with_errors() {
        let report = release_report(
            "1.2",
            vec![
                ValidationError::invalid_version("1.2"),
                ValidationError::invalid_date("1.2", "soon"),
            ],
        );
        let out = render(|o| o.write_release(&report));
        assert_eq!(
            out,
            "Errors found in version 1.2:\n\
             - Version 1.2 is not a valid semantic version.\n\
             - Version 1.2 has an invalid release date format.\n"
        );
    }

    #[test]
    fn test_report_lists_every_release() {
        let report = ChangelogReport {
            releases: vec![
                release_report("2.0.0", vec![ValidationError::invalid_version("2.0")]),
                release_report("1.0.0", Vec::new()),
            ],
        };
        let out = render(|o| o.write_report(&report));
        assert!(out.starts_with("Errors found in version 2.0.0:\n"));
        assert!(out.ends_with("Version 1.0.0 is valid.\n"));
    }

    #[test]
    fn test_structural_failure() {
        let error = ChangelogError::from(StructuralError::MissingUnreleased);
        let out = render(|o| o.write_changelog_error(&error));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], StructuralError::MissingUnreleased.to_string());
        assert_eq!(lines[1], FORMAT_INVALID);
    }

    #[test]
    fn test_extraction_failure() {
        let error = ChangelogError::from(ExtractError::NoReleases);
        let out = render(|o| o.write_changelog_error(&error));
        assert_eq!(out, "no dated release headings found\nIssue with changelog parsing\n");
    }

    #[test]
    fn test_write_error() {
        let out = render(|o| o.write_error("no changelog given"));
        assert_eq!(out, "Error: no changelog given\n");
    }
}
