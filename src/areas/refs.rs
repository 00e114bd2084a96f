//! Branch references and HEAD
//!
//! Branches are human-readable names pointing to commits. HEAD names the current branch and
//! is always symbolic: there is no detached HEAD.
//!
//! ## File Format
//!
//! - `HEAD` contains `ref: refs/heads/<branch>`
//! - `refs/heads/<branch>` contains the 40-character id of the branch head commit

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// References manager
///
/// Handles reading and writing HEAD and the branch refs, locking each ref file while it is
/// being read or written.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (`.gitlet`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

impl Refs {
    /// Name of the current branch, as recorded in HEAD
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let content = Self::read_ref_file(&self.head_path())?
            .with_context(|| format!("HEAD is missing at {:?}", self.head_path()))?;

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(&content)
            .with_context(|| format!("HEAD is not a symbolic ref: {content:?}"))?;

        BranchName::try_parse_sym_ref_name(&SymRefName::try_from(&symref_match[1])?)
    }

    pub fn set_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        Self::write_ref_file(
            &self.head_path(),
            &format!("ref: {}", branch_name.to_sym_ref_name().as_ref_path()),
        )?;
        log::debug!("HEAD now points at {branch_name}");

        Ok(())
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    /// Id of the commit the current branch points at
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let current = self.current_branch()?;

        self.read_branch(&current)?
            .with_context(|| format!("current branch {current} has no commit"))
    }

    /// Advance the current branch to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_branch(&self.current_branch()?, oid)
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        match Self::read_ref_file(&self.branch_path(branch_name))? {
            Some(content) => Ok(Some(ObjectId::try_parse(content)?)),
            None => Ok(None),
        }
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            return Err(GitletError::BranchAlreadyExists(name.to_string()).into());
        }
        // `a` and `a/b` cannot both be ref files
        if self.collides_with_existing_ref(name) {
            return Err(GitletError::InvalidBranchName(name.to_string()).into());
        }

        self.update_branch(name, source_oid)
    }

    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        Self::write_ref_file(&self.branch_path(name), oid.as_ref())?;
        log::debug!("branch {name} now points at {oid}");

        Ok(())
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(name);

        let oid = self
            .read_branch(name)?
            .ok_or_else(|| GitletError::BranchDoesNotExist(name.to_string()))?;

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(oid)
    }

    /// Every branch, ordered by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn read_ref_file(path: &Path) -> anyhow::Result<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content.to_string()))
        }
    }

    fn write_ref_file(path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        // open the ref file as WRONLY and CREAT to write commit_id to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;
        lock.deref_mut().write_all(b"\n")?;

        Ok(())
    }

    fn collides_with_existing_ref(&self, name: &BranchName) -> bool {
        let heads_path = self.heads_path();
        let branch_path = self.branch_path(name);

        branch_path.is_dir()
            || branch_path
                .ancestors()
                .skip(1)
                .take_while(|ancestor| *ancestor != heads_path.as_ref())
                .any(Path::is_file)
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(branch_name.to_sym_ref_name().as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
