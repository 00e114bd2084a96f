use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::GitletError;

impl Repository {
    /// Create a branch pointing at HEAD; the current branch does not change
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head_id = self.refs().read_head()?;

        self.refs().create_branch(&branch_name, &head_id)?;
        log::info!("created branch {branch_name} at {}", head_id.to_short_oid());

        Ok(())
    }

    /// Delete a branch pointer; its commits stay in the store
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::BranchDoesNotExist(branch_name.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(GitletError::CannotRemoveCurrentBranch(branch_name.to_string()).into());
        }

        let oid = self.refs().delete_branch(&branch_name)?;
        log::info!("deleted branch {branch_name} (was {})", oid.to_short_oid());

        Ok(())
    }
}
