//! Working directory status inspection
//!
//! This module compares the working directory against the staging index and the HEAD
//! commit.
//!
//! ## Components
//!
//! - `inspector`: Core logic for detecting untracked and changed files
//! - `status_info`: Status information aggregation

pub mod inspector;
pub mod status_info;

use std::fmt;

/// How a working file differs from the version the repository expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceChangeType::Modified => write!(f, "modified"),
            WorkspaceChangeType::Deleted => write!(f, "deleted"),
        }
    }
}
