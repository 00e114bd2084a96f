//! Staging index
//!
//! The index tracks what the next commit changes relative to the HEAD commit:
//!
//! - `additions`: file name to the exact bytes that will be committed
//! - `removals`: file names that the next commit stops tracking
//!
//! A file name is never present in both sets: staging one side drops the other.
//!
//! ## Index File Format
//!
//! See `artifacts::index` for the on-disk layout. The file is read under a shared lock and
//! rewritten under an exclusive lock, and its trailing SHA-1 checksum is verified on load.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use anyhow::{Context, anyhow};
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    additions: BTreeMap<String, Bytes>,
    removals: BTreeSet<String>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Stage `content` as the next committed version of `name`
    ///
    /// Overwrites previously staged content and cancels a pending removal.
    pub fn stage_addition(&mut self, name: &str, content: Bytes) {
        self.removals.remove(name);
        self.additions.insert(name.to_string(), content);
        self.changed = true;
    }

    /// Stage `name` for removal, cancelling a pending addition
    pub fn stage_removal(&mut self, name: &str) {
        self.additions.remove(name);
        self.removals.insert(name.to_string());
        self.changed = true;
    }

    /// Drop `name` from both sets, returning whether anything was staged
    pub fn unstage(&mut self, name: &str) -> bool {
        let unstaged = self.additions.remove(name).is_some() | self.removals.remove(name);
        self.changed |= unstaged;
        unstaged
    }

    pub fn staged_content(&self, name: &str) -> Option<&Bytes> {
        self.additions.get(name)
    }

    pub fn is_staged_for_addition(&self, name: &str) -> bool {
        self.additions.contains_key(name)
    }

    pub fn is_staged_for_removal(&self, name: &str) -> bool {
        self.removals.contains(name)
    }

    /// Staged additions, ordered by file name
    pub fn staged(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.additions
            .iter()
            .map(|(name, content)| (name.as_str(), content))
    }

    /// Staged removals, ordered by file name
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.removals.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn clear(&mut self) {
        self.changed |= !self.is_empty();
        self.additions.clear();
        self.removals.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file is an empty index. The checksum is verified after
    /// every entry has been read.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .context(format!("Unable to open index file {}", self.path().display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        // if the index file is empty, return early
        let file_len = lock.deref_mut().metadata()?.len();
        if file_len == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header = Self::parse_header(&mut reader)?;

        for _ in 0..header.additions_count {
            if let IndexEntry::Addition { name, content } =
                IndexEntry::read_addition(&mut reader, file_len)?
            {
                self.additions.insert(name, content);
            }
        }
        for _ in 0..header.removals_count {
            let entry = IndexEntry::read_removal(&mut reader, file_len)?;
            if self.additions.contains_key(entry.name()) {
                return Err(anyhow!(
                    "Corrupt index: {} is staged for addition and removal",
                    entry.name()
                ));
            }
            self.removals.insert(entry.name().to_string());
        }

        reader
            .verify()
            .context(format!("Corrupt index file {}", self.path().display()))
    }

    fn parse_header(reader: &mut Checksum) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(&header_bytes)?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    /// Persist the index
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .context(format!("Unable to open index file {}", self.path().display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = IndexHeader::new(self.additions.len() as u32, self.removals.len() as u32);
        writer.write(&header.serialize()?)?;

        for entry in self.entries() {
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        Ok(())
    }

    /// Every staged change, additions first
    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        let additions = self
            .additions
            .iter()
            .map(|(name, content)| IndexEntry::Addition {
                name: name.clone(),
                content: content.clone(),
            });
        let removals = self
            .removals
            .iter()
            .map(|name| IndexEntry::Removal { name: name.clone() });

        additions.chain(removals)
    }
}
