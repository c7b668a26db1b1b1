//! Chain table implementation

use crate::block::BlockId;
use crate::error::{MfsError, Result};

use super::SlotId;

/// Fixed table of block chains
pub struct ChainIndex {
    /// `None` marks a free slot; `Some` may be empty while a put is filling it
    slots: Vec<Option<Vec<BlockId>>>,

    /// Per-chain block ceiling
    max_chain_len: usize,
}

impl ChainIndex {
    /// Create a table with `slot_count` free slots
    pub fn new(slot_count: usize, max_chain_len: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            max_chain_len,
        }
    }

    /// Claim the lowest free slot
    pub fn allocate_slot(&mut self) -> Result<SlotId> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(MfsError::NoSlotAvailable)?;
        self.slots[slot] = Some(Vec::with_capacity(self.max_chain_len));
        Ok(slot)
    }

    /// Add a block to the end of a slot's chain
    ///
    /// # Panics
    ///
    /// Panics if the slot was never allocated.
    pub fn append(&mut self, slot: SlotId, block: BlockId) -> Result<()> {
        let max = self.max_chain_len;
        let chain = self.chain_entry(slot);
        if chain.len() >= max {
            return Err(MfsError::ChainFull { slot });
        }
        chain.push(block);
        Ok(())
    }

    /// Blocks of a slot in read order; empty for a free slot
    pub fn chain_of(&self, slot: SlotId) -> &[BlockId] {
        self.slots[slot].as_deref().unwrap_or(&[])
    }

    /// Return a slot to the free pool, handing back the chain it held
    pub fn clear(&mut self, slot: SlotId) -> Vec<BlockId> {
        self.slots[slot].take().unwrap_or_default()
    }

    pub fn is_allocated(&self, slot: SlotId) -> bool {
        self.slots[slot].is_some()
    }

    /// Number of slots currently claimed
    pub fn slots_in_use(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_chain_len(&self) -> usize {
        self.max_chain_len
    }

    /// Claimed slots with their chains, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &[BlockId])> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, chain)| chain.as_deref().map(|c| (slot, c)))
    }

    fn chain_entry(&mut self, slot: SlotId) -> &mut Vec<BlockId> {
        match self.slots[slot].as_mut() {
            Some(chain) => chain,
            None => panic!("append to unallocated slot {}", slot),
        }
    }
}
