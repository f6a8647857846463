use std::cell::RefCell;

use crate::error::{ReleaseError, Result};
use crate::runner::{CommandRunner, ExternalCommand};

/// Mock runner for testing without spawning git or gh
pub struct MockRunner {
    calls: RefCell<Vec<ExternalCommand>>,
    failures: Vec<(String, String)>,
}

impl MockRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        MockRunner {
            calls: RefCell::new(Vec::new()),
            failures: Vec::new(),
        }
    }

    /// Make `program subcommand ...` exit non-zero
    pub fn fail_on(mut self, program: impl Into<String>, subcommand: impl Into<String>) -> Self {
        self.failures.push((program.into(), subcommand.into()));
        self
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<ExternalCommand> {
        self.calls.borrow().clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &ExternalCommand) -> Result<()> {
        self.calls.borrow_mut().push(command.clone());

        let fails = self.failures.iter().any(|(program, subcommand)| {
            *program == command.program && Some(subcommand.as_str()) == command.subcommand()
        });
        if fails {
            return Err(ReleaseError::command(format!(
                "'{}' exited with code 1",
                command
            )));
        }

        Ok(())
    }
}
