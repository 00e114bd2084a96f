use crate::areas::database::Database;
use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".gitlet", ".", ".."];

/// Working directory accessor
///
/// The working directory is flat: only regular files directly below the repository root are
/// considered. Sub-directories and the `.gitlet` directory are ignored.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Names of every regular file in the working directory, in name order
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();

        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry.context("Unable to list the working directory")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !IGNORED_PATHS.contains(&name.as_ref()) {
                files.insert(name.into_owned());
            }
        }

        Ok(files)
    }

    /// Path of a top-level working file
    ///
    /// Anything but a single plain name outside `.gitlet` is not a working file.
    fn file_path(&self, file_name: &str) -> anyhow::Result<PathBuf> {
        let mut components = Path::new(file_name).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !IGNORED_PATHS.contains(&file_name) => {
                Ok(self.path.join(name))
            }
            _ => Err(GitletError::FileNotFound(file_name.to_string()).into()),
        }
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.file_path(file_name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let path = self.file_path(file_name)?;
        if !path.is_file() {
            return Err(GitletError::FileNotFound(file_name.to_string()).into());
        }

        let content = std::fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", file_name))?;

        Ok(Bytes::from(content))
    }

    pub fn parse_blob(&self, file_name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_name)?))
    }

    pub fn write_file(&self, file_name: &str, content: &[u8]) -> anyhow::Result<()> {
        let path = self.file_path(file_name)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_name))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_name))
    }

    /// Delete a working file; a file that is already gone is not an error
    pub fn remove_file(&self, file_name: &str) -> anyhow::Result<()> {
        let path = self.file_path(file_name)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => {
                Err(error).with_context(|| format!("Failed to remove file: {:?}", file_name))
            }
        }
    }

    /// Carry out a planned checkout: deletions first, then writes
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for (file_name, _) in migration.actions_of(ActionType::Delete) {
            self.remove_file(file_name)?;
        }

        for action in [ActionType::Modify, ActionType::Add] {
            for (file_name, blob_id) in migration.actions_of(action) {
                let blob_id = blob_id
                    .as_ref()
                    .with_context(|| format!("No blob planned for {file_name}"))?;
                let blob = database.load_blob(blob_id)?;

                self.write_file(file_name, blob.content())?;
            }
        }

        Ok(())
    }
}
