//! Three-way merge
//!
//! - `split_finder`: Split point (common ancestor) discovery
//! - `resolution`: Per-file classification against the split point
//! - `conflict`: Conflict marker synthesis

pub mod conflict;
pub mod resolution;
pub mod split_finder;

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

/// Result of a merge that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given branch is already part of the current history; nothing changed
    AlreadyAncestor,
    /// The current branch was moved forward to the given commit
    FastForward(ObjectId),
    /// A merge commit was created
    Merged {
        commit_id: ObjectId,
        commit: Commit,
        conflicted: bool,
    },
}
