//! Core repository components
//!
//! This module contains the fundamental building blocks of a gitlet repository:
//!
//! - `database`: Object database for storing blobs and commits
//! - `index`: Staging area tracking pending additions and removals
//! - `lock`: Repository-wide reader/writer lock
//! - `refs`: Reference management (branches, HEAD)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
