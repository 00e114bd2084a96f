//! Porcelain commands (user-facing gitlet operations)
//!
//! Porcelain commands provide the high-level user interface for version control.
//! They compose plumbing commands and internal operations into complete workflows.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for commit
//! - `commit`: Create a new commit
//! - `rm`: Unstage a file or stage its removal
//! - `log`, `global-log`: Show commit history
//! - `find`: Find commits by message
//! - `status`: Show working directory status
//! - `branch`, `rm-branch`: Create or delete branches
//! - `checkout`: Switch branches or restore files
//! - `reset`: Move the current branch to a commit
//! - `merge`: Merge a branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;

#[cfg(test)]
pub(crate) mod fixtures;
