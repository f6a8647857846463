//! Release channel classification
//!
//! A version decides on its own whether a hosted release is made and how it is
//! flagged. Matching is a plain case-sensitive substring test.

use std::fmt;

/// Where a version gets published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    /// Tag only, no hosted release
    None,
    /// Release flagged as pre-release
    Prerelease,
    /// Release flagged as latest
    Latest,
}

impl ReleaseChannel {
    /// Classify a version string.
    ///
    /// # Examples
    /// - "v1.0.0-stable" -> Latest
    /// - "v1.0.0-rc1" -> Prerelease
    /// - "v1.0.0-beta" -> Prerelease
    /// - "v1.0.0" -> None
    pub fn classify(version: &str) -> Self {
        if version.contains("stable") {
            ReleaseChannel::Latest
        } else if version.contains("rc") || version.contains("beta") {
            ReleaseChannel::Prerelease
        } else {
            ReleaseChannel::None
        }
    }

    /// Whether a hosted release should be created at all
    pub fn is_release(&self) -> bool {
        !matches!(self, ReleaseChannel::None)
    }

    /// The `gh release create` flag for this channel
    pub fn release_flag(&self) -> Option<&'static str> {
        match self {
            ReleaseChannel::None => None,
            ReleaseChannel::Prerelease => Some("--prerelease"),
            ReleaseChannel::Latest => Some("--latest"),
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseChannel::None => write!(f, "none"),
            ReleaseChannel::Prerelease => write!(f, "pre-release"),
            ReleaseChannel::Latest => write!(f, "latest"),
        }
    }
}
