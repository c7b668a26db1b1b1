//! Free-block bitmap
//!
//! One bit per block packed into `u64` words. A set bit marks the block used.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Free,
    Used,
}

/// Packed used/free map for a fixed number of blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    words: Vec<u64>,
    len: usize,
}

impl Bitmap {
    const BITS: usize = u64::BITS as usize;

    /// Create a bitmap tracking `len` blocks, all free
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(Self::BITS)],
            len,
        }
    }

    /// Number of blocks tracked
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, blocknr: usize) -> State {
        assert!(blocknr < self.len, "block {} out of range ({} blocks)", blocknr, self.len);
        let (word, mask) = Self::locate(blocknr);
        if self.words[word] & mask == 0 {
            State::Free
        } else {
            State::Used
        }
    }

    pub fn set_used(&mut self, blocknr: usize) {
        assert!(blocknr < self.len, "block {} out of range ({} blocks)", blocknr, self.len);
        let (word, mask) = Self::locate(blocknr);
        self.words[word] |= mask;
    }

    pub fn set_free(&mut self, blocknr: usize) {
        assert!(blocknr < self.len, "block {} out of range ({} blocks)", blocknr, self.len);
        let (word, mask) = Self::locate(blocknr);
        self.words[word] &= !mask;
    }

    /// Lowest-numbered free block, if any
    pub fn first_free(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, word)| **word != u64::MAX)
            .map(|(i, word)| i * Self::BITS + word.trailing_ones() as usize)
            // Bits past `len` in the last word are never set, so they can surface here.
            .filter(|&blocknr| blocknr < self.len)
    }

    /// Number of free blocks
    pub fn count_free(&self) -> usize {
        let used: usize = self.words.iter().map(|w| w.count_ones() as usize).sum();
        self.len - used
    }

    fn locate(blocknr: usize) -> (usize, u64) {
        (blocknr / Self::BITS, 1u64 << (blocknr % Self::BITS))
    }
}
