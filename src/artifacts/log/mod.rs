//! Commit history traversal
//!
//! - `rev_list`: First-parent walk from a commit back to the root commit
//!
//! `log` follows first parents only, so the merged-in side of a merge commit is not listed.
//! `global-log` does not walk the graph at all: it lists the commit database.

pub mod rev_list;
