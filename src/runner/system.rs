use std::process::Command;

use crate::error::{ReleaseError, Result};
use crate::runner::{CommandRunner, ExternalCommand};
use crate::ui;

/// Runs commands as child processes with inherited stdio
///
/// No timeout is applied; a command that hangs blocks the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> Result<()> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|e| {
                ReleaseError::command(format!("failed to execute '{}': {}", command.program, e))
            })?;

        if !status.success() {
            return Err(ReleaseError::command(format!(
                "'{}' exited with code {}",
                command,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

/// Prints commands instead of running them
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &ExternalCommand) -> Result<()> {
        ui::display_command(command);
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
