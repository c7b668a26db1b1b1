//! Directory Module
//!
//! Flat namespace of file records.
//!
//! ## Responsibilities
//! - Name uniqueness and name-length limits
//! - O(1) lookup by name
//! - Listing in most-recently-added-first order
//!
//! ## Data Structure Choice
//! A `HashMap` keyed by name answers lookups; a `BTreeMap` keyed by an
//! insertion sequence number remembers arrival order so `list()` can walk it
//! backwards. Removing a record drops its sequence entry, so a name that is
//! deleted and stored again lists as the newest file.

mod table;

pub use table::Directory;

use crate::index::SlotId;

/// Metadata for one stored file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Unique file name
    pub name: String,

    /// Size in bytes
    pub size: usize,

    /// Creation timestamp as produced by the engine's clock
    pub created: String,

    /// Chain slot holding the file's blocks
    pub slot: SlotId,
}
