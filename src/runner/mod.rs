//! External command abstraction layer
//!
//! Tags and releases are published by shelling out to `git` and `gh`. This
//! module puts a trait in front of process spawning so the publish workflow can
//! run against the real tools, print what it would do, or record invocations
//! in tests.
//!
//! - [system::SystemRunner]: runs the command and waits for it
//! - [system::DryRunRunner]: prints the command without running it
//! - [mock::MockRunner]: records commands and fails on request

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::{DryRunRunner, SystemRunner};

use std::fmt;

use crate::error::Result;

/// Longest argument shown in full by [ExternalCommand]'s `Display`.
const MAX_DISPLAY_ARG: usize = 40;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    /// Create a command for `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        ExternalCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The first argument, e.g. `tag` for `git tag ...`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            let first_line = arg.lines().next().unwrap_or("");
            if arg.contains('\n') || first_line.chars().count() > MAX_DISPLAY_ARG {
                let short: String = first_line.chars().take(MAX_DISPLAY_ARG).collect();
                write!(f, " \"{}...\"", short)?;
            } else if arg.is_empty() || arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands to completion
///
/// Implementations block until the command exits. A non-zero exit status or a
/// failure to spawn is reported as [crate::error::ReleaseError::Command].
pub trait CommandRunner {
    /// Run a command and wait for it to finish
    ///
    /// # Returns
    /// * `Ok(())` - The command exited with status zero
    /// * `Err` - The command could not be started or exited non-zero
    fn run(&self, command: &ExternalCommand) -> Result<()>;

    /// Whether commands are only being previewed
    fn is_dry_run(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let cmd = ExternalCommand::new("git")
            .arg("push")
            .args(["origin", "v1.0.0"]);
        assert_eq!(cmd.program, "git");
        assert_eq!(cmd.args, vec!["push", "origin", "v1.0.0"]);
        assert_eq!(cmd.subcommand(), Some("push"));
    }

    #[test]
    fn test_display_plain() {
        let cmd = ExternalCommand::new("git").args(["push", "origin", "v1.0.0"]);
        assert_eq!(cmd.to_string(), "git push origin v1.0.0");
    }

    #[test]
    fn test_display_abbreviates_multiline() {
        let cmd = ExternalCommand::new("git").args(["tag", "-m", "## v1.0.0\nnotes"]);
        assert_eq!(cmd.to_string(), "git tag -m \"## v1.0.0...\"");
    }

    #[test]
    fn test_display_quotes_spaces() {
        let cmd = ExternalCommand::new("gh").args(["--title", "my title", ""]);
        assert_eq!(cmd.to_string(), "gh --title \"my title\" \"\"");
    }
}
