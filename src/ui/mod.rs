//! User interface module - console output for the release run.
//!
//! All printing goes through [formatter] so the workflow stays free of
//! styling details.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_command, display_error, display_release_entry,
    display_status, display_success,
};
