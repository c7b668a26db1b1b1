//! Block-Chain Index Module
//!
//! Maps a file slot to the ordered list of blocks holding its bytes.
//!
//! ## Responsibilities
//! - Hand out free slots (one per live file)
//! - Record the blocks of a file in read order
//! - Enforce the per-file block ceiling
//!
//! The index never touches the block store: clearing a slot forgets its
//! chain, releasing the blocks is the caller's job.

mod chain;

pub use chain::ChainIndex;

/// Index of a chain slot in `[0, max_files)`
pub type SlotId = usize;
