//! Version-control data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: Branch name validation
//! - `checkout`: Checkout migrations and untracked file protection
//! - `core`: Shared utilities (errors, configuration, pager wrapper)
//! - `database`: Commit index used to resolve abbreviated commit ids
//! - `index`: Staging index file format
//! - `log`: Commit history traversal
//! - `merge`: Split point discovery and three-way merge resolution
//! - `objects`: Object types (blob, commit)
//! - `status`: Working directory inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod database;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
