//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_publish_workflow, PublishOutcome, PublishWorkflowArgs};
