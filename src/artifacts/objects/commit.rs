//! Commit object
//!
//! Commits are snapshots of the working directory at a point in time. Because the working
//! directory is flat, a commit carries its snapshot directly as a map from file name to blob
//! id instead of pointing at a tree object. It also records:
//! - the first parent (absent only for the root commit)
//! - the merged-in parent (merge commits only)
//! - the branch that was current when it was created
//! - the timestamp and the message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! merge-parent <parent-sha>
//! branch <branch-name>
//! date <unix-seconds> <+hhmm>
//! file <blob-sha> <file-name>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;
use std::io::BufRead;

/// File name to blob id, ordered by file name
pub type Snapshot = BTreeMap<String, ObjectId>;

pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";
pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    merge_parent: Option<ObjectId>,
    branch: String,
    timestamp: DateTime<FixedOffset>,
    snapshot: Snapshot,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        merge_parent: Option<ObjectId>,
        branch: String,
        timestamp: DateTime<FixedOffset>,
        snapshot: Snapshot,
        message: String,
    ) -> Self {
        Commit {
            parent,
            merge_parent,
            branch,
            timestamp,
            snapshot,
            message,
        }
    }

    /// The root commit every repository starts from
    ///
    /// It has no parents, an empty snapshot and is dated at the Unix epoch, so every
    /// repository shares the same root commit id.
    pub fn initial() -> Self {
        Commit::new(
            None,
            None,
            DEFAULT_BRANCH.to_string(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            Snapshot::new(),
            INITIAL_COMMIT_MESSAGE.to_string(),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.merge_parent.as_ref()
    }

    /// Parents in traversal order: first parent, then the merged-in parent
    pub fn parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parent.iter().chain(self.merge_parent.iter())
    }

    pub fn is_merge(&self) -> bool {
        self.merge_parent.is_some()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Independent copy of the snapshot, to be edited into a child commit's snapshot
    pub fn derive_snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    pub fn blob_id(&self, file_name: &str) -> Option<&ObjectId> {
        self.snapshot.get(file_name)
    }

    pub fn tracks(&self, file_name: &str) -> bool {
        self.snapshot.contains_key(file_name)
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn body(&self) -> String {
        let mut lines = vec![];

        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        if let Some(merge_parent) = &self.merge_parent {
            lines.push(format!("merge-parent {merge_parent}"));
        }
        lines.push(format!("branch {}", self.branch));
        lines.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (file_name, blob_id) in &self.snapshot {
            lines.push(format!("file {blob_id} {file_name}"));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        lines.join("\n")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(with_header(self.object_type(), self.body().as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: body is not UTF-8")?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parent = None;
        let mut merge_parent = None;
        let mut branch = None;
        let mut timestamp = None;
        let mut snapshot = Snapshot::new();

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match key {
                "parent" => parent = Some(ObjectId::try_parse(value.to_string())?),
                "merge-parent" => merge_parent = Some(ObjectId::try_parse(value.to_string())?),
                "branch" => branch = Some(value.to_string()),
                "date" => timestamp = Some(parse_date(value)?),
                "file" => {
                    if value.len() <= OBJECT_ID_LENGTH + 1 {
                        anyhow::bail!("Invalid commit object: malformed file line {line:?}");
                    }
                    let (blob_id, file_name) = value.split_at(OBJECT_ID_LENGTH);
                    let blob_id = ObjectId::try_parse(blob_id.to_string())?;
                    snapshot.insert(file_name[1..].to_string(), blob_id);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header {key:?}"),
            }
        }

        Ok(Commit::new(
            parent,
            merge_parent,
            branch.context("Invalid commit object: missing branch line")?,
            timestamp.context("Invalid commit object: missing date line")?,
            snapshot,
            message.to_string(),
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.body()
    }
}

/// Parse `<unix-seconds> <+hhmm>`
fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, offset) = value
        .split_once(' ')
        .context("Invalid commit object: malformed date line")?;

    let seconds = seconds
        .parse::<i64>()
        .context("Invalid commit object: invalid timestamp")?;
    let offset = parse_offset(offset)?;

    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .context("Invalid commit object: timestamp out of range")
}

fn parse_offset(offset: &str) -> anyhow::Result<FixedOffset> {
    let invalid = || anyhow::anyhow!("Invalid commit object: invalid timezone {offset:?}");

    if offset.len() != 5 || !offset.is_ascii() {
        return Err(invalid());
    }
    let (sign, digits) = offset.split_at(1);
    let hours = digits[..2].parse::<i32>().map_err(|_| invalid())?;
    let minutes = digits[2..].parse::<i32>().map_err(|_| invalid())?;
    let seconds = hours * 3600 + minutes * 60;

    match sign {
        "+" => FixedOffset::east_opt(seconds),
        "-" => FixedOffset::west_opt(seconds),
        _ => None,
    }
    .ok_or_else(invalid)
}
