use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let _lock = self.lock(LockMode::Shared)?;

        let mut matches = vec![];
        for commit_id in self.database().commit_index()?.iter() {
            if self.database().load_commit(&commit_id)?.message() == message {
                matches.push(commit_id);
            }
        }

        if matches.is_empty() {
            return Err(GitletError::NoMatch(message.to_string()).into());
        }

        let mut writer = self.writer();
        for commit_id in &matches {
            writeln!(writer, "{commit_id}")?;
        }

        Ok(matches)
    }
}
