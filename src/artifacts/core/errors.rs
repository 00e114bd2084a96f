//! Typed repository errors
//!
//! Every user-facing failure of a gitlet command is one of the variants below. They travel
//! through `anyhow::Result` like any other error and are recognised at the command line
//! boundary with `downcast_ref::<GitletError>()`, which prints their message verbatim.

/// Broad category of a [`GitletError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command was invoked with the wrong operands
    Usage,
    /// The repository is not in a state that allows the operation
    Precondition,
    /// A commit, file, or message could not be found
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GitletError {
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("File does not exist.")]
    FileNotFound(String),

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove(String),

    #[error("No commit with that id exists.")]
    NoSuchCommit(String),

    #[error("Commit id prefix {prefix} is ambiguous: {} candidates.", candidates.len())]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("File does not exist in that commit.")]
    FileNotInCommit(String),

    #[error("No such branch exists.")]
    NoSuchBranch(String),

    #[error("A branch with that name does not exist.")]
    BranchDoesNotExist(String),

    #[error("No need to checkout the current branch.")]
    AlreadyCurrentBranch(String),

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch(String),

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict(Vec<String>),

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("Found no commit with that message.")]
    NoMatch(String),

    #[error("Incorrect operands.")]
    IncorrectOperands,
}

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::IncorrectOperands => ErrorKind::Usage,
            GitletError::NoSuchCommit(_)
            | GitletError::AmbiguousCommit { .. }
            | GitletError::FileNotInCommit(_)
            | GitletError::NoMatch(_) => ErrorKind::NotFound,
            _ => ErrorKind::Precondition,
        }
    }
}

/// Extract the [`GitletError`] carried by an `anyhow::Error`, if any
pub fn as_gitlet_error(error: &anyhow::Error) -> Option<&GitletError> {
    error.downcast_ref::<GitletError>()
}
