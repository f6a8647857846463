//! Changelog parsing.
//!
//! The changelog is a list of release sections, newest first:
//!
//! ```text
//! ## v1.2.0-beta
//! <free-form notes>
//! =======
//! ## v1.1.0-stable
//! ...
//! ```
//!
//! Only the first section is of interest: its heading gives the version and
//! everything read before the separator becomes the release notes.

use std::fs;
use std::path::Path;

use crate::domain::ReleaseEntry;
use crate::error::{ReleaseError, Result};

/// Default changelog file name, looked up in the working directory.
pub const DEFAULT_CHANGELOG: &str = "CHANGE_LOGS.md";

/// Prefix of a version heading line.
pub const HEADING_PREFIX: &str = "## ";

/// Line that terminates the newest release section.
pub const SEPARATOR: &str = "=======";

/// Result of scanning a changelog up to the first separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChangelog {
    /// Text after the first `## ` heading, if any heading was seen
    pub version: Option<String>,
    /// Every stripped line read before the separator, newline joined
    pub description: String,
}

impl ParsedChangelog {
    /// Converts into a release entry. `None` when no heading was found.
    pub fn into_entry(self) -> Option<ReleaseEntry> {
        let description = self.description;
        self.version
            .map(|version| ReleaseEntry::new(version, description))
    }

    /// Headings inside the description other than the one that set the version.
    ///
    /// These only show up when a separator is missing between two sections.
    pub fn additional_headings(&self) -> Vec<String> {
        self.description
            .lines()
            .filter_map(|line| line.strip_prefix(HEADING_PREFIX))
            .skip(1)
            .map(str::to_string)
            .collect()
    }
}

/// Scans changelog text.
///
/// Lines are stripped of surrounding whitespace. The first line starting with
/// `## ` sets the version; later headings are kept as ordinary lines. Reading
/// stops at the first line equal to `=======`, which is not included.
pub fn parse_changelog(text: &str) -> ParsedChangelog {
    let mut version: Option<String> = None;
    let mut description: Vec<&str> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if version.is_none() {
            if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
                version = Some(rest.to_string());
            }
        }
        if line == SEPARATOR {
            break;
        }
        description.push(line);
    }

    ParsedChangelog {
        version,
        description: description.join("\n"),
    }
}

/// Reads and parses the changelog at `path`.
///
/// # Returns
/// * `Ok(ParsedChangelog)` - Parsed result, possibly without a version
/// * `Err` - If the file cannot be read
pub fn extract_version_and_description(path: impl AsRef<Path>) -> Result<ParsedChangelog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        ReleaseError::changelog(format!("cannot read '{}': {}", path.display(), e))
    })?;
    Ok(parse_changelog(&text))
}
