use std::path::PathBuf;

use crate::domain::ReleaseChannel;

/// Version and release notes taken from the newest changelog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub version: String,
    pub description: String,
}

impl ReleaseEntry {
    /// Create a new release entry
    pub fn new(version: impl Into<String>, description: impl Into<String>) -> Self {
        ReleaseEntry {
            version: version.into(),
            description: description.into(),
        }
    }

    /// Release channel derived from the version
    pub fn channel(&self) -> ReleaseChannel {
        ReleaseChannel::classify(&self.version)
    }
}

/// A directory to zip before the release is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSpec {
    pub source_directory: PathBuf,
    pub output_filename: PathBuf,
}

impl ArchiveSpec {
    /// Archive for `directory`, written to `{directory}.zip`.
    ///
    /// Returns `None` for an empty directory name, which disables archiving.
    pub fn for_directory(directory: &str) -> Option<Self> {
        let trimmed = directory.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            return None;
        }
        Some(ArchiveSpec {
            source_directory: PathBuf::from(directory),
            output_filename: PathBuf::from(format!("{}.zip", trimmed)),
        })
    }
}
