use crate::artifacts::core::errors::GitletError;
use crate::artifacts::database::commit_index::CommitIndex;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const BLOBS_DIR: &str = "objects";
pub const COMMITS_DIR: &str = "commits";

/// Content-addressed object store
///
/// Blobs and commits live in separate fan-out directories below the repository directory,
/// each object file named by its id (`<2 hex>/<38 hex>`) and holding the framed object
/// (`<type> <size>\0<body>`). Objects are immutable: storing an object twice is a no-op.
#[derive(Debug)]
pub struct Database {
    blobs_path: Box<Path>,
    commits_path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            blobs_path: path.join(BLOBS_DIR).into_boxed_path(),
            commits_path: path.join(COMMITS_DIR).into_boxed_path(),
        }
    }

    pub fn blobs_path(&self) -> &Path {
        &self.blobs_path
    }

    pub fn commits_path(&self) -> &Path {
        &self.commits_path
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path_for(object.object_type()).join(object_id.to_path());

        // write the object to disk unless it already exists
        if !object_path.exists() {
            let object_content = object.serialize()?;
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object_content)?;
            log::debug!("stored {} {}", object.object_type(), object_id);
        }

        Ok(object_id)
    }

    pub fn has_commit(&self, commit_id: &ObjectId) -> bool {
        self.commits_path.join(commit_id.to_path()).is_file()
    }

    pub fn load_blob(&self, blob_id: &ObjectId) -> anyhow::Result<Blob> {
        let (object_type, object_reader) = self.parse_object_as_bytes(ObjectType::Blob, blob_id)?;

        match object_type {
            ObjectType::Blob => Blob::deserialize(object_reader),
            other => Err(anyhow::anyhow!("Object {blob_id} is a {other}, not a blob")),
        }
    }

    pub fn load_commit(&self, commit_id: &ObjectId) -> anyhow::Result<Commit> {
        if !self.has_commit(commit_id) {
            return Err(GitletError::NoSuchCommit(commit_id.to_string()).into());
        }

        let (object_type, object_reader) =
            self.parse_object_as_bytes(ObjectType::Commit, commit_id)?;

        match object_type {
            ObjectType::Commit => Commit::deserialize(object_reader)
                .with_context(|| format!("Unable to parse commit {commit_id}")),
            other => Err(anyhow::anyhow!("Object {commit_id} is a {other}, not a commit")),
        }
    }

    /// Load an object of either kind, commits taking precedence
    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        if self.has_commit(object_id) {
            return Ok(ObjectBox::Commit(Box::new(self.load_commit(object_id)?)));
        }

        Ok(ObjectBox::Blob(Box::new(self.load_blob(object_id)?)))
    }

    /// Build the sorted index of every stored commit id
    pub fn commit_index(&self) -> anyhow::Result<CommitIndex> {
        if !self.commits_path.exists() {
            return Ok(CommitIndex::default());
        }

        let mut index = CommitIndex::default();
        for entry in WalkDir::new(&self.commits_path).min_depth(2).max_depth(2) {
            let entry = entry.context("Unable to list the commit database")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let dir_name = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let file_name = entry.file_name().to_string_lossy();

            // temp files and stray entries are not commit ids
            if let Ok(commit_id) = ObjectId::try_parse(format!("{dir_name}{file_name}")) {
                index.insert(&commit_id);
            }
        }

        Ok(index)
    }

    fn path_for(&self, object_type: ObjectType) -> &Path {
        match object_type {
            ObjectType::Blob => &self.blobs_path,
            ObjectType::Commit => &self.commits_path,
        }
    }

    fn parse_object_as_bytes(
        &self,
        expected: ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_path = self.path_for(expected).join(object_id.to_path());
        let object_content = self.read_object(object_path)?;
        let body_len = object_content.len();
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_object_header(&mut object_reader)?;
        let remaining = body_len - object_reader.position() as usize;
        if size != remaining {
            anyhow::bail!("Object {object_id} is corrupt: expected {size} bytes, found {remaining}");
        }

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
