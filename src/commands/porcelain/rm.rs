use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::core::errors::GitletError;

impl Repository {
    /// Unstage a pending addition, or stage the removal of a tracked file
    ///
    /// Removing a tracked file also deletes it from the working directory.
    pub async fn rm(&mut self, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_staged_for_addition(file_name) {
            index.unstage(file_name);
        } else {
            let (_, head) = self.head_commit()?;
            if !head.tracks(file_name) {
                return Err(GitletError::NothingToRemove(file_name.to_string()).into());
            }

            index.stage_removal(file_name);
            self.workspace().remove_file(file_name)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
