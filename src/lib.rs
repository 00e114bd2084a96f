//! gitlet - a small, local version-control engine
//!
//! The crate is organised the same way the command line tool thinks about a repository:
//!
//! - `areas`: the persistent parts of a repository (object database, refs, staging index,
//!   working directory) and the repository session tying them together
//! - `artifacts`: the data types and algorithms operating on those areas (objects, commit
//!   history, checkout migrations, merge resolution, status inspection)
//! - `commands`: the user-facing operations, implemented as methods on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
