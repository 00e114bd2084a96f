use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, file_name: &str, write: bool) -> anyhow::Result<ObjectId> {
        let mode = if write {
            LockMode::Exclusive
        } else {
            LockMode::Shared
        };
        let _lock = self.lock(mode)?;

        let blob = self.workspace().parse_blob(file_name)?;
        let blob_id = blob.object_id()?;

        if write {
            self.database().store(&blob)?;
        }

        writeln!(self.writer(), "{blob_id}")?;

        Ok(blob_id)
    }
}
