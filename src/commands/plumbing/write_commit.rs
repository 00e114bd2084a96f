use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Turn the staged changes into a commit on top of HEAD and advance the current branch
    ///
    /// Merge commits pass the merged-in head as `merge_parent`; they are written even when
    /// the merge staged nothing. The caller holds the repository lock and the index.
    pub(crate) fn write_commit(
        &self,
        index: &mut Index,
        message: &str,
        merge_parent: Option<ObjectId>,
    ) -> anyhow::Result<(ObjectId, Commit)> {
        if message.is_empty() {
            return Err(GitletError::EmptyMessage.into());
        }
        if index.is_empty() && merge_parent.is_none() {
            return Err(GitletError::NothingToCommit.into());
        }

        let (head_id, head) = self.head_commit()?;
        let mut snapshot = head.derive_snapshot();

        for (name, content) in index.staged() {
            let blob_id = self.database().store(&Blob::new(content.clone()))?;
            snapshot.insert(name.to_string(), blob_id);
        }
        for name in index.removed() {
            snapshot.remove(name);
        }

        let branch = self.refs().current_branch()?;
        let commit = Commit::new(
            Some(head_id),
            merge_parent,
            branch.to_string(),
            self.config().now(),
            snapshot,
            message.to_string(),
        );
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        log::info!("committed {} on {branch}", commit_id.to_short_oid());

        Ok((commit_id, commit))
    }
}
