use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;

impl Repository {
    /// Check out an arbitrary commit and move the current branch to it
    pub async fn reset(&mut self, commit_ref: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let target_id = self.resolve_commit(commit_ref)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        self.checkout_commit(&mut index, &target_id)?;
        self.refs().update_head(&target_id)?;
        log::info!("reset current branch to {}", target_id.to_short_oid());

        Ok(())
    }
}
