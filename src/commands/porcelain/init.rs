use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::commit::{Commit, DEFAULT_BRANCH};
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create `.gitlet` with the root commit on `master`
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().blobs_path())
            .context("Failed to create .gitlet/objects directory")?;

        fs::create_dir_all(self.database().commits_path())
            .context("Failed to create .gitlet/commits directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let _lock = self.lock(LockMode::Exclusive)?;

        let initial_commit_id = self.database().store(&Commit::initial())?;
        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .create_branch(&default_branch, &initial_commit_id)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_current_branch(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let index = self.index();
        let mut index = index.lock().await;
        // an empty index file
        index.write_updates()?;

        log::info!(
            "initialized repository at {} with root commit {}",
            self.path().display(),
            initial_commit_id.to_short_oid()
        );

        Ok(())
    }
}
