//! Changelog discovery.

use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// File name searched for, compared case-insensitively.
pub const CHANGELOG_FILE_NAME: &str = "changelog.md";

/// Returns true if the file name is `changelog.md` in any letter case.
pub fn is_changelog_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(CHANGELOG_FILE_NAME)
}

/// Finds a changelog file below `root`.
///
/// Walks the tree recursively, skipping hidden files and directories and
/// without consulting `.gitignore`. The shallowest match wins; matches at the
/// same depth are ordered by path.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use changelog_validator_core::find_changelog_file;
///
/// if let Some(path) = find_changelog_file(Path::new(".")) {
///     println!("Found changelog at: {}", path.display());
/// }
/// ```
pub fn find_changelog_file(root: &Path) -> Option<PathBuf> {
    debug!("Searching for {} under {:?}", CHANGELOG_FILE_NAME, root);

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .build();

    let found = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| entry.file_name().to_str().is_some_and(is_changelog_name))
        .inspect(|entry| trace!("Candidate: {:?}", entry.path()))
        .min_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.path().cmp(b.path())))
        .map(|entry| entry.into_path());

    match &found {
        Some(path) => debug!("Found changelog at {:?}", path),
        None => debug!("No changelog found under {:?}", root),
    }
    found
}
