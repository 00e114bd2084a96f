use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type FileSet = BTreeSet<String>;
pub type ChangeSet = BTreeMap<String, WorkspaceChangeType>;

/// Snapshot of the repository state reported by `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub current_branch: BranchName,
    pub branches: Vec<BranchName>,
    pub staged_files: FileSet,
    pub removed_files: FileSet,
    pub workspace_changeset: ChangeSet,
    pub untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let (_, head) = self.repository.head_commit()?;
        let workspace_files = self.repository.workspace().list_files()?;

        let inspector = Inspector::new(self.repository.workspace(), &head, index);
        let workspace_changeset = inspector.workspace_changes(&workspace_files)?;
        let untracked_files = inspector.untracked_files(&workspace_files);

        Ok(StatusInfo {
            current_branch: self.repository.refs().current_branch()?,
            branches: self.repository.refs().list_branches()?,
            staged_files: index.staged().map(|(name, _)| name.to_string()).collect(),
            removed_files: index.removed().map(str::to_string).collect(),
            workspace_changeset,
            untracked_files,
        })
    }
}
