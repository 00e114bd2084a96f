//! Repository-wide lock
//!
//! Every command holds `.gitlet/lock` for its whole duration: exclusively when it mutates
//! the repository, shared when it only reads it. The lock is released when the guard drops.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

pub const LOCK_FILE_NAME: &str = "lock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    Shared,
    Exclusive,
}

impl From<LockMode> for Lock {
    fn from(mode: LockMode) -> Self {
        match mode {
            LockMode::Shared => Lock::Shared,
            LockMode::Exclusive => Lock::Exclusive,
        }
    }
}

#[derive(Debug)]
pub struct RepositoryLock {
    mode: LockMode,
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the lock file at `path` is held in `mode`
    pub fn acquire(path: &Path, mode: LockMode) -> anyhow::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("failed to open lock file at {:?}", path))?;

        let guard = file_guard::lock(Box::new(file), mode.into(), 0, 1)
            .with_context(|| format!("failed to lock {:?}", path))?;
        log::debug!("acquired {mode:?} repository lock");

        Ok(RepositoryLock {
            mode,
            _guard: guard,
        })
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}
