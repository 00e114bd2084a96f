//! Checkout operations
//!
//! This module handles moving the working directory from the HEAD commit to another commit:
//! - Refusing to overwrite untracked files
//! - Planning the file writes and deletions
//!
//! Every check runs while planning, before any file is touched.

pub mod migration;
