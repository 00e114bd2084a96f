use crate::areas::index::Index;
use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Switch to another branch, replacing the working files with its head's snapshot
    pub async fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::NoSuchBranch(branch_name.to_string()))?;
        let target_id = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| GitletError::NoSuchBranch(branch_name.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(GitletError::AlreadyCurrentBranch(branch_name.to_string()).into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        self.checkout_commit(&mut index, &target_id)?;
        self.refs().set_current_branch(&branch_name)?;
        log::info!("switched to branch {branch_name}");

        Ok(())
    }

    /// Restore one file from a commit (HEAD when `commit_ref` is `None`)
    ///
    /// The staging index is left untouched.
    pub fn checkout_file(&mut self, commit_ref: Option<&str>, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let commit_id = match commit_ref {
            Some(commit_ref) => self.resolve_commit(commit_ref)?,
            None => self.refs().read_head()?,
        };
        let commit = self.database().load_commit(&commit_id)?;

        let blob_id = commit
            .blob_id(file_name)
            .ok_or_else(|| GitletError::FileNotInCommit(file_name.to_string()))?;
        let blob = self.database().load_blob(blob_id)?;

        self.workspace().write_file(file_name, blob.content())
    }

    /// Move the working directory and the index from HEAD to `target_id`
    ///
    /// Fails before touching anything if an untracked file would be overwritten. Checking
    /// out HEAD itself changes nothing. The caller holds the repository lock and moves the
    /// refs afterwards.
    pub(crate) fn checkout_commit(
        &self,
        index: &mut Index,
        target_id: &ObjectId,
    ) -> anyhow::Result<Commit> {
        let (head_id, head) = self.head_commit()?;
        let target = self.database().load_commit(target_id)?;

        if &head_id == target_id {
            return Ok(target);
        }

        let workspace_files = self.workspace().list_files()?;
        let migration = Migration::plan(&head, &target, &workspace_files, index)?;
        self.workspace().apply_migration(&migration, self.database())?;

        index.clear();
        index.write_updates()?;

        log::debug!(
            "checked out {} over {}",
            target_id.to_short_oid(),
            head_id.to_short_oid()
        );

        Ok(target)
    }
}
