use crate::areas::index::Index;
use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::untracked_files;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::resolution::{FileVersions, MergeAction};
use crate::artifacts::merge::split_finder::SplitFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeSet;
use std::io::Write;

const ALREADY_ANCESTOR_NOTICE: &str = "Given branch is an ancestor of the current branch.";
const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

impl Repository {
    /// Merge the head of `branch_name` into the current branch
    ///
    /// Every precondition is checked before the working directory is touched. Conflicts do
    /// not abort the merge: the conflicted files are committed with markers.
    pub async fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let _lock = self.lock(LockMode::Exclusive)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if !index.is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let target_branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::BranchDoesNotExist(branch_name.to_string()))?;
        let target_id = self
            .refs()
            .read_branch(&target_branch)?
            .ok_or_else(|| GitletError::BranchDoesNotExist(branch_name.to_string()))?;

        let current_branch = self.refs().current_branch()?;
        if current_branch == target_branch {
            return Err(GitletError::SelfMerge.into());
        }

        let (head_id, head) = self.head_commit()?;
        let target = self.database().load_commit(&target_id)?;

        let workspace_files = self.workspace().list_files()?;
        let in_the_way = untracked_files(&head, &workspace_files, &index)
            .filter(|name| target.tracks(name))
            .map(str::to_string)
            .collect::<Vec<_>>();
        if !in_the_way.is_empty() {
            return Err(GitletError::UntrackedFileConflict(in_the_way).into());
        }

        let split_id = self.find_split_point(&head_id, &target_id)?;

        if split_id == target_id {
            writeln!(self.writer(), "{ALREADY_ANCESTOR_NOTICE}")?;
            return Ok(MergeOutcome::AlreadyAncestor);
        }

        if split_id == head_id {
            self.checkout_commit(&mut index, &target_id)?;
            self.refs().update_head(&target_id)?;
            log::info!("fast-forwarded {current_branch} to {}", target_id.to_short_oid());

            writeln!(self.writer(), "{FAST_FORWARD_NOTICE}")?;
            return Ok(MergeOutcome::FastForward(target_id));
        }

        let split = self.database().load_commit(&split_id)?;
        let conflicted = self.merge_files(&mut index, &split, &head, &target)?;

        let message = format!("Merged {target_branch} into {current_branch}.");
        let (commit_id, commit) = self.write_commit(&mut index, &message, Some(target_id))?;
        log::info!(
            "merged {target_branch} into {current_branch} as {}",
            commit_id.to_short_oid()
        );

        if conflicted {
            writeln!(self.writer(), "{CONFLICT_NOTICE}")?;
        }

        Ok(MergeOutcome::Merged {
            commit_id,
            commit,
            conflicted,
        })
    }

    fn find_split_point(&self, head_id: &ObjectId, target_id: &ObjectId) -> anyhow::Result<ObjectId> {
        let database = self.database();
        let split_finder = SplitFinder::new(|oid: &ObjectId| {
            let commit = database.load_commit(oid)?;
            Ok(commit.parents().cloned().collect())
        });

        split_finder
            .find_split_point(head_id, target_id)?
            .with_context(|| format!("{head_id} and {target_id} have no common ancestor"))
    }

    /// Apply the three-way classification of every file to the working directory and the
    /// index, returning whether any file conflicted
    fn merge_files(
        &self,
        index: &mut Index,
        split: &Commit,
        head: &Commit,
        target: &Commit,
    ) -> anyhow::Result<bool> {
        let file_names = split
            .snapshot()
            .keys()
            .chain(head.snapshot().keys())
            .chain(target.snapshot().keys())
            .collect::<BTreeSet<_>>();

        let mut conflicted = false;
        for file_name in file_names {
            let versions = FileVersions::new(
                split.blob_id(file_name),
                head.blob_id(file_name),
                target.blob_id(file_name),
            );
            let action = versions.resolve();
            log::debug!("merge {file_name}: {action:?}");

            match action {
                MergeAction::Keep => {}
                MergeAction::TakeTarget => {
                    let blob_id = versions
                        .target
                        .with_context(|| format!("{file_name} is missing from the target"))?;
                    let content = self.database().load_blob(blob_id)?.into_content();

                    self.workspace().write_file(file_name, &content)?;
                    index.stage_addition(file_name, content);
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(file_name)?;
                    index.stage_removal(file_name);
                }
                MergeAction::Conflict => {
                    let current = self.load_optional_blob(versions.current)?;
                    let given = self.load_optional_blob(versions.target)?;
                    let content = conflict_content(
                        current.as_ref().map(|blob| blob.content().as_ref()),
                        given.as_ref().map(|blob| blob.content().as_ref()),
                    );

                    self.database().store(&Blob::new(content.clone()))?;
                    self.workspace().write_file(file_name, &content)?;
                    index.stage_addition(file_name, content);
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }

    fn load_optional_blob(&self, blob_id: Option<&ObjectId>) -> anyhow::Result<Option<Blob>> {
        blob_id
            .map(|blob_id| self.database().load_blob(blob_id))
            .transpose()
    }
}
