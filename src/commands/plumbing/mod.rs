//! Plumbing commands (low-level gitlet operations)
//!
//! Plumbing commands provide direct access to the object store. They're primarily
//! used for scripting and as building blocks for porcelain commands.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob id and optionally store the blob
//! - `cat-file`: Print the content of a stored blob or commit

pub mod cat_file;
pub mod hash_object;
mod write_commit;
