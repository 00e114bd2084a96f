//! Database lookup structures
//!
//! This module contains types built on top of the object database listing.

pub mod commit_index;
