//! Staging index file format
//!
//! The index (staging area) records what the next commit will change relative to HEAD:
//! files staged for addition together with their full contents, and files staged for
//! removal.
//!
//! ## File Format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "GLIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Addition count (4 bytes)
//!   - Removal count (4 bytes)
//!
//! Additions:
//!   - Name length (4 bytes), name
//!   - Content length (8 bytes), content
//!
//! Removals:
//!   - Name length (4 bytes), name
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are stored in network byte order.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "GLIX";

/// Index file format version
pub const VERSION: u32 = 1;
