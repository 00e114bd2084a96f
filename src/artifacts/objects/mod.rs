//! Object types and operations
//!
//! Gitlet stores all content as objects identified by SHA-1 hashes. There are two types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: A flat snapshot (file name to blob id) with message, timestamp and parents
//!
//! All objects implement serialization/deserialization for the object format:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form printed for merge parents
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
