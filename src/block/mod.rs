//! Block Module
//!
//! Fixed-size block storage over one flat memory region.
//!
//! ## Responsibilities
//! - Partition the region into `num_blocks` blocks of `block_size` bytes
//! - Track used/free state in a packed bitmap
//! - Hand out the lowest free block first (no best-fit, no contiguity)
//!
//! ## Layout
//! ```text
//! region:  ┌─────────┬─────────┬─────────┬─────┬───────────┐
//!          │ block 0 │ block 1 │ block 2 │ ... │ block N-1 │
//!          └─────────┴─────────┴─────────┴─────┴───────────┘
//! bitmap:     bit 0     bit 1     bit 2    ...    bit N-1     (1 = used)
//! ```

mod bitmap;
mod store;

pub use bitmap::{Bitmap, State};
pub use store::BlockStore;

/// Index of a block in `[0, num_blocks)`
pub type BlockId = usize;
