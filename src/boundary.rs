use std::fmt;

/// Warnings raised while preparing a release.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The release notes contain more headings than the one that set the version
    AdditionalHeadings {
        version: String,
        headings: Vec<String>,
    },
    /// A configured release attachment does not exist
    MissingAttachment { path: String },
    /// The working directory is not inside a git repository
    NoTagRepository { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::AdditionalHeadings { version, headings } => {
                write!(
                    f,
                    "Release notes for '{}' also contain heading(s) {}; is a '=======' separator missing?",
                    version,
                    headings
                        .iter()
                        .map(|h| format!("'{}'", h))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            BoundaryWarning::MissingAttachment { path } => {
                write!(f, "Release attachment '{}' does not exist", path)
            }
            BoundaryWarning::NoTagRepository { reason } => {
                write!(f, "Skipping existing-tag check: {}", reason)
            }
        }
    }
}
