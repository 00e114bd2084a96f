//! Gitlet command implementations
//!
//! This module contains all command implementations, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object inspection (hash-object, cat-file)
//! - `porcelain`: User-facing commands for version control workflows (add, commit, log, etc.)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
