//! Domain logic - pure release rules independent of git and gh

pub mod channel;
pub mod release;

pub use channel::ReleaseChannel;
pub use release::{ArchiveSpec, ReleaseEntry};
