use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Stage the working version of `file_name`
    ///
    /// A file whose content matches the version tracked by HEAD is unstaged instead, which
    /// also cancels a pending removal.
    pub async fn add(&mut self, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let content = self.workspace().read_file(file_name)?;
        let blob_id = Blob::new(content.clone()).object_id()?;
        let (_, head) = self.head_commit()?;

        if head.blob_id(file_name) == Some(&blob_id) {
            index.unstage(file_name);
            log::debug!("{file_name} matches HEAD, unstaged");
        } else {
            index.stage_addition(file_name, content);
            log::debug!("staged {file_name} as {}", blob_id.to_short_oid());
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(())
    }
}
