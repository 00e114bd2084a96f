use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print the first-parent history of HEAD, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Shared)?;

        let head_id = self.refs().read_head()?;
        for entry in RevList::new(self.database(), head_id) {
            let (commit_id, commit) = entry?;
            self.show_commit(&commit_id, &commit)?;
        }

        Ok(())
    }

    /// Print every commit in the store, in commit id order
    pub fn global_log(&self) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Shared)?;

        let commit_index = self.database().commit_index()?;
        for commit_id in commit_index.iter() {
            let commit = self.database().load_commit(&commit_id)?;
            self.show_commit(&commit_id, &commit)?;
        }

        Ok(())
    }

    fn show_commit(&self, commit_id: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {commit_id}")?;
        if let (Some(parent), Some(merge_parent)) = (commit.parent(), commit.merge_parent()) {
            writeln!(
                writer,
                "Merge: {} {}",
                parent.to_short_oid(),
                merge_parent.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
