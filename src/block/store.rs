//! Block Store
//!
//! Owns the raw block region and its free-block bitmap.

use bytes::BytesMut;
use tracing::trace;

use crate::error::{MfsError, Result};

use super::{Bitmap, BlockId, State};

/// Fixed-capacity array of equally sized blocks
///
/// Blocks are only ever reachable through this store; callers hold plain
/// `BlockId`s and go through `read`/`write`/`block_mut` for the bytes.
pub struct BlockStore {
    /// Flat region of `num_blocks * block_size` bytes
    region: BytesMut,

    /// Used/free state per block
    bitmap: Bitmap,

    block_size: usize,
}

impl BlockStore {
    /// Create a zeroed store with every block free
    pub fn new(num_blocks: usize, block_size: usize) -> Self {
        Self {
            region: BytesMut::zeroed(num_blocks * block_size),
            bitmap: Bitmap::new(num_blocks),
            block_size,
        }
    }

    /// Mark the lowest free block used and return it
    pub fn allocate(&mut self) -> Result<BlockId> {
        let id = self.bitmap.first_free().ok_or(MfsError::Exhausted)?;
        self.bitmap.set_used(id);
        trace!(block = id, "allocated block");
        Ok(id)
    }

    /// Return a block to the free pool
    ///
    /// # Panics
    ///
    /// Freeing a block that is already free means two owners believed they
    /// held it; this panics instead of silently corrupting the bitmap.
    pub fn free(&mut self, id: BlockId) {
        assert_eq!(self.bitmap.get(id), State::Used, "double free of block {}", id);
        self.bitmap.set_free(id);
        trace!(block = id, "freed block");
    }

    /// Full contents of a block
    pub fn read(&self, id: BlockId) -> &[u8] {
        let range = self.range(id);
        &self.region[range]
    }

    /// Copy `data` into the front of a block, zero-filling the rest
    ///
    /// # Panics
    ///
    /// Panics if `data` is longer than one block.
    pub fn write(&mut self, id: BlockId, data: &[u8]) {
        assert!(
            data.len() <= self.block_size,
            "write of {} bytes exceeds block size {}",
            data.len(),
            self.block_size
        );
        let block = self.block_mut(id);
        block[..data.len()].copy_from_slice(data);
        block[data.len()..].fill(0);
    }

    /// Mutable view of a block, for filling it straight from a reader
    pub fn block_mut(&mut self, id: BlockId) -> &mut [u8] {
        let range = self.range(id);
        &mut self.region[range]
    }

    pub fn is_free(&self, id: BlockId) -> bool {
        self.bitmap.get(id) == State::Free
    }

    /// Number of free blocks
    pub fn free_count(&self) -> usize {
        self.bitmap.count_free()
    }

    /// Number of used blocks
    pub fn used_count(&self) -> usize {
        self.bitmap.len() - self.bitmap.count_free()
    }

    pub fn num_blocks(&self) -> usize {
        self.bitmap.len()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    fn range(&self, id: BlockId) -> std::ops::Range<usize> {
        assert!(
            id < self.bitmap.len(),
            "block {} out of range ({} blocks)",
            id,
            self.bitmap.len()
        );
        let start = id * self.block_size;
        start..start + self.block_size
    }
}
