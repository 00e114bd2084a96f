//! Per-file merge classification
//!
//! Every file name present in the split point, the current head or the target head is
//! classified by comparing the blob ids of its three versions. Absence is a version too, so a
//! file modified on one side and deleted on the other differs on both sides.
//!
//! | split  | current | target     | action       |
//! |--------|---------|------------|--------------|
//! | S      | S       | T != S     | take target  |
//! | absent | absent  | T          | take target  |
//! | S      | S       | absent     | remove       |
//! | S      | C != S  | T != S, C  | conflict     |
//! | absent | C       | T != C     | conflict     |
//! | other  |         |            | keep current |

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// Leave the current version in place
    Keep,
    /// Check out the target version and stage it
    TakeTarget,
    /// Delete the file and stage the removal
    Remove,
    /// Write conflict markers and stage the result
    Conflict,
}

/// The three versions of one file taking part in a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct FileVersions<'v> {
    pub split: Option<&'v ObjectId>,
    pub current: Option<&'v ObjectId>,
    pub target: Option<&'v ObjectId>,
}

impl FileVersions<'_> {
    pub fn resolve(&self) -> MergeAction {
        match (self.split, self.current, self.target) {
            (Some(split), current, Some(target))
                if target != split && current == Some(split) =>
            {
                MergeAction::TakeTarget
            }
            (None, None, Some(_)) => MergeAction::TakeTarget,
            (Some(split), Some(current), None) if current == split => MergeAction::Remove,
            (Some(split), current, target)
                if current != Some(split) && target != Some(split) && current != target =>
            {
                MergeAction::Conflict
            }
            (None, Some(current), Some(target)) if current != target => MergeAction::Conflict,
            _ => MergeAction::Keep,
        }
    }
}
