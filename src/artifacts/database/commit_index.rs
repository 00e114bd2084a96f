//! Sorted index of commit ids
//!
//! Users may name a commit by any unambiguous prefix of its id. The index keeps every
//! stored commit id in a `BTreeSet`, so a prefix query is a range scan starting at the
//! prefix and stopping at the first id that no longer starts with it.

use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::collections::BTreeSet;
use std::ops::Bound;

#[derive(Debug, Clone, Default)]
pub struct CommitIndex {
    ids: BTreeSet<String>,
}

impl CommitIndex {
    pub fn insert(&mut self, commit_id: &ObjectId) {
        self.ids.insert(commit_id.as_ref().to_string());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every commit id, in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids
            .iter()
            .filter_map(|id| ObjectId::try_parse(id.clone()).ok())
    }

    /// Ids starting with `prefix`, in ascending order
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();

        self.ids
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|id| id.starts_with(prefix.as_str()))
            .cloned()
            .collect()
    }

    /// Resolve a full id or an abbreviation of at least `min_len` characters
    pub fn resolve(&self, prefix: &str, min_len: usize) -> anyhow::Result<ObjectId> {
        let no_such_commit = || GitletError::NoSuchCommit(prefix.to_string());

        if !ObjectId::is_hex_prefix(prefix) {
            return Err(no_such_commit().into());
        }
        if prefix.len() < min_len.min(OBJECT_ID_LENGTH) {
            return Err(no_such_commit().into());
        }

        let mut candidates = self.matching(prefix);
        match candidates.len() {
            0 => Err(no_such_commit().into()),
            1 => ObjectId::try_parse(candidates.remove(0)),
            _ => Err(GitletError::AmbiguousCommit {
                prefix: prefix.to_string(),
                candidates,
            }
            .into()),
        }
    }
}

impl FromIterator<ObjectId> for CommitIndex {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        let mut index = CommitIndex::default();
        for commit_id in iter {
            index.insert(&commit_id);
        }
        index
    }
}
