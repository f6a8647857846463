//! GitHub release creation through the `gh` CLI.

use std::path::Path;

use crate::archive;
use crate::boundary::BoundaryWarning;
use crate::config::ReleaseConfig;
use crate::domain::{ReleaseChannel, ReleaseEntry};
use crate::error::{ReleaseError, Result};
use crate::runner::{CommandRunner, ExternalCommand};
use crate::ui;

/// What happened to the hosted release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    /// The version is not release-worthy; only the tag was published
    Skipped,
    /// A release was created on the given channel
    Created(ReleaseChannel),
}

/// Builds `gh release create <version> <attachments...> --title <version>
/// --notes <description> --prerelease|--latest`.
///
/// Returns `None` for versions that do not get a release.
pub fn release_create_command(
    entry: &ReleaseEntry,
    attachments: &[String],
) -> Option<ExternalCommand> {
    let flag = entry.channel().release_flag()?;
    let command = ExternalCommand::new("gh")
        .args(["release", "create", entry.version.as_str()])
        .args(attachments.iter().map(String::as_str))
        .args(["--title", entry.version.as_str()])
        .args(["--notes", entry.description.as_str()])
        .arg(flag);
    Some(command)
}

/// Creates a GitHub release for `entry` when its version asks for one.
///
/// Versions without `stable`, `rc` or `beta` are skipped. Otherwise the
/// configured archive is built first, then `gh release create` runs with the
/// configured attachments. Under a dry-run runner the archive is not written.
///
/// # Returns
/// * `Ok(ReleaseAction::Skipped)` - No release needed
/// * `Ok(ReleaseAction::Created(channel))` - Release created
/// * `Err` - If archiving or `gh` fails
pub fn create_github_release(
    runner: &dyn CommandRunner,
    entry: &ReleaseEntry,
    release: &ReleaseConfig,
) -> Result<ReleaseAction> {
    let channel = entry.channel();
    if !channel.is_release() {
        ui::display_status(&format!(
            "Version {} does not match criteria for release. No release will be created.",
            entry.version
        ));
        return Ok(ReleaseAction::Skipped);
    }

    if let Some(spec) = release.archive_spec() {
        if runner.is_dry_run() {
            ui::display_status(&format!(
                "Dry run: would archive '{}' into '{}'",
                spec.source_directory.display(),
                spec.output_filename.display()
            ));
        } else {
            ui::display_status(&format!(
                "Archiving '{}' into '{}'",
                spec.source_directory.display(),
                spec.output_filename.display()
            ));
            archive::zip_folder(&spec.source_directory, &spec.output_filename)?;
        }
    }

    let attachments = release.attachments();
    if !runner.is_dry_run() {
        for path in attachments.iter().filter(|p| !Path::new(p.as_str()).exists()) {
            ui::display_boundary_warning(&BoundaryWarning::MissingAttachment {
                path: path.clone(),
            });
        }
    }

    if let Some(command) = release_create_command(entry, &attachments) {
        ui::display_status(&format!(
            "Creating {} release for {}",
            channel, entry.version
        ));
        runner.run(&command).map_err(|e| {
            ReleaseError::command(format!(
                "GitHub release creation for '{}' failed: {}",
                entry.version, e
            ))
        })?;
    }

    Ok(ReleaseAction::Created(channel))
}
