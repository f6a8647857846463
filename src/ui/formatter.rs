//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic for the release run.
//! Functions here have no side effects beyond printing.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::ReleaseEntry;
use crate::runner::ExternalCommand;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version and release notes extracted from the changelog.
pub fn display_release_entry(entry: &ReleaseEntry) {
    println!(
        "\n{} {}",
        style("Extracted version:").bold(),
        style(&entry.version).green()
    );
    println!("{}", style("Tag description:").underlined());
    for line in entry.description.lines() {
        println!("  {}", line);
    }
    println!();
}

/// Display a command that would run in dry-run mode.
pub fn display_command(command: &ExternalCommand) {
    println!("  {} {}", style("would run:").dim(), style(command).cyan());
}
