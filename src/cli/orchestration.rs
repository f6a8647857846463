//! Main workflow orchestration logic
//!
//! Sequences the release run: parse the changelog, publish the tag, then the
//! hosted release. Kept apart from `main.rs` so the workflow can be driven
//! programmatically and tested against a [MockRunner](crate::runner::MockRunner).

use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::config::Config;
use crate::domain::ReleaseChannel;
use crate::error::Result;
use crate::git_ops::{self, GitRepo};
use crate::github::{self, ReleaseAction};
use crate::runner::CommandRunner;
use crate::ui;

/// Arguments for the publish workflow
///
/// Mirrors the CLI flags that override configuration. Decoupled from clap so
/// the workflow can be called without it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Changelog to read instead of the configured one
    pub changelog: Option<String>,

    /// Directory to archive instead of the configured one
    pub archive_dir: Option<String>,

    /// Attachments to use instead of the configured ones
    pub attachments: Vec<String>,

    /// Git remote to push the tag to
    pub remote: Option<String>,

    /// Preview mode - print commands without running them
    pub dry_run: bool,
}

impl PublishWorkflowArgs {
    /// Applies the command-line overrides on top of a loaded config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(path) = &self.changelog {
            config.changelog.path = path.clone();
        }
        if let Some(dir) = &self.archive_dir {
            config.release.archive_source_directory = dir.clone();
        }
        if !self.attachments.is_empty() {
            config.release.attachment_paths = Some(self.attachments.clone());
        }
        if let Some(remote) = &self.remote {
            config.git.remote = remote.clone();
        }
        config
    }
}

/// Result of a publish workflow that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The changelog has no `## ` heading; nothing was published
    SkippedNoHeading,
    /// The tag was pushed; the version does not qualify for a release
    TagOnly { version: String },
    /// The tag was pushed and a release created
    TagAndRelease {
        version: String,
        channel: ReleaseChannel,
    },
}

/// Main publish workflow
///
/// 1. Parse the changelog for the newest version and its notes
/// 2. Check the tag does not already exist (when a repository is given)
/// 3. Create and push the annotated tag
/// 4. Create the GitHub release if the version qualifies
///
/// # Arguments
///
/// * `config` - Effective configuration, overrides already applied
/// * `runner` - Executes `git` and `gh`
/// * `repo` - Repository used for pre-flight checks, if available
pub fn run_publish_workflow(
    config: &Config,
    runner: &dyn CommandRunner,
    repo: Option<&GitRepo>,
) -> Result<PublishOutcome> {
    let parsed = changelog::extract_version_and_description(&config.changelog.path)?;
    let extra_headings = parsed.additional_headings();

    let entry = match parsed.into_entry() {
        Some(entry) => entry,
        None => return Ok(PublishOutcome::SkippedNoHeading),
    };

    ui::display_release_entry(&entry);

    if !extra_headings.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::AdditionalHeadings {
            version: entry.version.clone(),
            headings: extra_headings,
        });
    }

    if let Some(repo) = repo {
        repo.ensure_can_publish(&entry.version, &config.git.remote)?;
    }

    ui::display_status(&format!(
        "Creating tag {} and pushing to {}",
        entry.version, config.git.remote
    ));
    git_ops::create_and_push_tag(
        runner,
        &entry.version,
        &entry.description,
        &config.git.remote,
    )?;
    ui::display_success(&format!("Tag {} published", entry.version));

    let outcome = match github::create_github_release(runner, &entry, &config.release)? {
        ReleaseAction::Skipped => PublishOutcome::TagOnly {
            version: entry.version,
        },
        ReleaseAction::Created(channel) => PublishOutcome::TagAndRelease {
            version: entry.version,
            channel,
        },
    };

    Ok(outcome)
}
