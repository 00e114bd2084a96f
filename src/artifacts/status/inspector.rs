use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

/// Compares the working directory with the HEAD commit and the staging index
#[derive(new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
    head: &'r Commit,
    index: &'r Index,
}

impl<'r> Inspector<'r> {
    /// Working files the next commit would ignore
    ///
    /// A file is untracked when it is neither staged for addition nor tracked by HEAD, or
    /// when it is staged for removal but present again.
    pub fn untracked_files(&self, workspace_files: &BTreeSet<String>) -> BTreeSet<String> {
        workspace_files
            .iter()
            .filter(|name| {
                let staged = self.index.is_staged_for_addition(name);
                let tracked = self.head.tracks(name);

                (!staged && !tracked) || self.index.is_staged_for_removal(name)
            })
            .cloned()
            .collect()
    }

    /// Changes in the working directory that are not staged
    pub fn workspace_changes(
        &self,
        workspace_files: &BTreeSet<String>,
    ) -> anyhow::Result<BTreeMap<String, WorkspaceChangeType>> {
        let mut changes = BTreeMap::new();

        for (name, content) in self.index.staged() {
            if !workspace_files.contains(name) {
                changes.insert(name.to_string(), WorkspaceChangeType::Deleted);
            } else if &self.workspace.read_file(name)? != content {
                changes.insert(name.to_string(), WorkspaceChangeType::Modified);
            }
        }

        for (name, blob_id) in self.head.snapshot() {
            if self.index.is_staged_for_addition(name) || self.index.is_staged_for_removal(name) {
                continue;
            }

            if !workspace_files.contains(name) {
                changes.insert(name.clone(), WorkspaceChangeType::Deleted);
            } else if self.is_content_changed(name, blob_id)? {
                changes.insert(name.clone(), WorkspaceChangeType::Modified);
            }
        }

        Ok(changes)
    }

    fn is_content_changed(&self, name: &str, blob_id: &ObjectId) -> anyhow::Result<bool> {
        let blob = Blob::new(self.workspace.read_file(name)?);

        Ok(&blob.object_id()? != blob_id)
    }
}
