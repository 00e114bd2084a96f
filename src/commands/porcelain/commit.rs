use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<(ObjectId, Commit)> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        self.write_commit(&mut index, message, None)
    }
}
