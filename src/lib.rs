pub mod archive;
pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod github;
pub mod runner;
pub mod ui;

pub use error::{ReleaseError, Result};
