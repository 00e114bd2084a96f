//! Checkout migration and untracked file protection
//!
//! A migration is the plan for turning a working directory that matches the current commit
//! into one matching a target commit:
//!
//! 1. Every file of the target snapshot is written (`Add` when the current commit does not
//!    track it, `Modify` when it does)
//! 2. Every file tracked by the current commit but absent from the target is deleted
//!
//! A working file that is neither tracked by the current commit nor staged for addition is
//! untracked. Planning fails with `UntrackedFileConflict` if the target would overwrite one.

use crate::areas::index::Index;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Overwrite a tracked file
    Modify,
}

/// Planned actions grouped by type; deletions carry no blob
pub type ActionsSet = BTreeMap<ActionType, Vec<(String, Option<ObjectId>)>>;

#[derive(Debug, Clone, Default)]
pub struct Migration {
    actions: ActionsSet,
}

impl Migration {
    /// Plan the move from `current` to `target`
    ///
    /// `workspace_files` are the file names present in the working directory.
    pub fn plan(
        current: &Commit,
        target: &Commit,
        workspace_files: &BTreeSet<String>,
        index: &Index,
    ) -> anyhow::Result<Self> {
        let in_the_way = untracked_files(current, workspace_files, index)
            .filter(|name| target.tracks(name))
            .map(str::to_string)
            .collect::<Vec<_>>();

        if !in_the_way.is_empty() {
            return Err(GitletError::UntrackedFileConflict(in_the_way).into());
        }

        let mut actions = ActionsSet::new();
        for (name, blob_id) in target.snapshot() {
            let action = if current.tracks(name) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            actions
                .entry(action)
                .or_default()
                .push((name.clone(), Some(blob_id.clone())));
        }
        for name in current.snapshot().keys() {
            if !target.tracks(name) {
                actions
                    .entry(ActionType::Delete)
                    .or_default()
                    .push((name.clone(), None));
            }
        }

        Ok(Migration { actions })
    }

    pub fn actions_of(&self, action: ActionType) -> &[(String, Option<ObjectId>)] {
        self.actions
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Working files neither tracked by `current` nor staged for addition
pub fn untracked_files<'a>(
    current: &'a Commit,
    workspace_files: &'a BTreeSet<String>,
    index: &'a Index,
) -> impl Iterator<Item = &'a str> {
    workspace_files
        .iter()
        .map(String::as_str)
        .filter(|name| !current.tracks(name) && !index.is_staged_for_addition(name))
}
