use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::lock::{LOCK_FILE_NAME, LockMode, RepositoryLock};
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::errors::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the repository directory below the working directory root
pub const GITLET_DIR: &str = ".gitlet";

/// Repository session
///
/// Ties together the areas of one repository rooted at a working directory. Porcelain
/// commands are implemented as methods on this type; each one takes the repository lock for
/// its whole duration.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let gitlet_path = path.join(GITLET_DIR);

        let index = Index::new(gitlet_path.join("index").into_boxed_path());
        let database = Database::new(gitlet_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(gitlet_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> Box<Path> {
        self.path.join(GITLET_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GitletError::NotInitialized.into())
        }
    }

    /// Take the repository lock, failing if there is no repository
    pub fn lock(&self, mode: LockMode) -> anyhow::Result<RepositoryLock> {
        self.ensure_initialized()?;
        RepositoryLock::acquire(&self.gitlet_path().join(LOCK_FILE_NAME), mode)
    }

    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head_id = self.refs.read_head()?;
        let head = self.database.load_commit(&head_id)?;

        Ok((head_id, head))
    }

    /// Resolve a full commit id or an unambiguous abbreviation
    pub fn resolve_commit(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        self.database
            .commit_index()?
            .resolve(prefix, self.config.abbrev_min())
    }
}
