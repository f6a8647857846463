use git2::Repository;
use std::path::Path;

use crate::error::{ReleaseError, Result};
use crate::runner::{CommandRunner, ExternalCommand};

/// Builds `git tag -a <version> -m <description>`.
pub fn tag_create_command(version: &str, description: &str) -> ExternalCommand {
    ExternalCommand::new("git").args(["tag", "-a", version, "-m", description])
}

/// Builds `git push <remote> <version>`.
pub fn tag_push_command(remote: &str, version: &str) -> ExternalCommand {
    ExternalCommand::new("git").args(["push", remote, version])
}

/// Creates an annotated tag and pushes it to `remote`.
///
/// The tag is created with `git tag -a` using `description` as its message,
/// then pushed with `git push`. If the push fails the local tag is left in
/// place.
///
/// # Returns
/// * `Ok(())` - Tag created and pushed
/// * `Err` - If either git command fails
pub fn create_and_push_tag(
    runner: &dyn CommandRunner,
    version: &str,
    description: &str,
    remote: &str,
) -> Result<()> {
    runner
        .run(&tag_create_command(version, description))
        .map_err(|e| ReleaseError::tag(format!("failed to create tag '{}': {}", version, e)))?;

    runner
        .run(&tag_push_command(remote, version))
        .map_err(|e| {
            ReleaseError::tag(format!(
                "failed to push tag '{}' to '{}': {}",
                version, remote, e
            ))
        })?;

    Ok(())
}

/// Whether `remote` is a URL rather than a configured remote name.
pub fn is_url_remote(remote: &str) -> bool {
    remote.contains("://") || remote.contains(':')
}

/// Read-only view of the local repository used for pre-flight checks.
///
/// Tags are created and pushed through the `git` CLI so the user's own
/// signing and credential setup applies; this wrapper only inspects state.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers the git repository containing the current working directory.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        Self::discover(".")
    }

    /// Discovers the git repository containing `path`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Whether a tag named `tag_name` exists locally.
    pub fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Err(ReleaseError::tag(
                format!("'{}' is not a valid tag name", tag_name),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a remote named `remote_name` is configured.
    pub fn has_remote(&self, remote_name: &str) -> Result<bool> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().any(|name| name == remote_name))
    }

    /// Fails if the tag already exists or the remote is not configured.
    ///
    /// URL remotes (`https://...`, `git@host:repo`) are passed to `git push`
    /// as-is and are not checked.
    pub fn ensure_can_publish(&self, tag_name: &str, remote_name: &str) -> Result<()> {
        if self.tag_exists(tag_name)? {
            return Err(ReleaseError::tag(format!(
                "tag '{}' already exists locally",
                tag_name
            )));
        }
        if !is_url_remote(remote_name) && !self.has_remote(remote_name)? {
            return Err(ReleaseError::tag(format!(
                "no remote named '{}' found",
                remote_name
            )));
        }
        Ok(())
    }
}
