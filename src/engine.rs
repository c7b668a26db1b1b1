//! Engine Module
//!
//! The storage engine that coordinates all components.
//!
//! ## Responsibilities
//! - Validate put requests against capacity, size, name and slot limits
//! - Copy file bytes into freshly allocated blocks and chain them
//! - Stream chained blocks back out in order
//! - Release blocks and slots on delete
//! - Keep the aggregate free-space counter in step with the above

use std::io::{Read, Write};

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, warn};

use crate::block::{BlockId, BlockStore};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::directory::{Directory, FileRecord};
use crate::error::{MfsError, Result};
use crate::index::{ChainIndex, SlotId};

/// The main storage engine
///
/// ## Ownership Model
///
/// The engine is the single owner of the block store, the chain index and
/// the directory; every mutation goes through a `&mut self` method that runs
/// to completion. The three structures are not updated atomically with
/// respect to each other, so anyone sharing an engine between threads must
/// put the whole engine behind one lock.
///
/// ## Consistency
///
/// After every public call:
/// - `free_space() == capacity − Σ(live file sizes)`
/// - each used block belongs to exactly one live chain
/// - each claimed slot belongs to exactly one directory record
///
/// A failed `put` undoes its partial work before returning, so these hold on
/// the error path too. `verify()` checks them on demand.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Raw blocks and the free-block bitmap
    blocks: BlockStore,

    /// Slot → ordered block chain
    index: ChainIndex,

    /// Name → file record
    directory: Directory,

    /// capacity − Σ(live file sizes), in bytes
    free_space: usize,

    /// Stamps creation time on new records
    clock: Box<dyn Clock>,
}

impl Engine {
    /// Create an empty engine using the local wall clock
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }

    /// Create an empty engine with a custom timestamp source
    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Result<Self> {
        config.validate()?;

        let blocks = BlockStore::new(config.num_blocks, config.block_size);
        let index = ChainIndex::new(config.max_files, config.max_blocks_per_file);
        let directory = Directory::new(config.max_name_len);
        let free_space = config.capacity();

        debug!(
            num_blocks = config.num_blocks,
            block_size = config.block_size,
            max_files = config.max_files,
            "engine initialized"
        );

        Ok(Self {
            config,
            blocks,
            index,
            directory,
            free_space,
            clock: Box::new(clock),
        })
    }

    /// Store `size` bytes read from `source` under `name`
    ///
    /// Checks, in order:
    /// 1. `size` fits in the remaining free space
    /// 2. `size` fits in one chain
    /// 3. `name` is non-empty and within the length limit
    /// 4. `name` is not already stored
    /// 5. `size` is non-zero
    /// 6. a chain slot is free
    ///
    /// Then copies the source one block at a time. If a block cannot be
    /// allocated or the source fails part-way, every block taken so far is
    /// freed and the slot cleared before the error is returned.
    pub fn put<R: Read>(&mut self, name: &str, mut source: R, size: usize) -> Result<()> {
        if size > self.free_space {
            return Err(MfsError::InsufficientSpace {
                requested: size,
                available: self.free_space,
            });
        }
        let max_file_size = self.config.max_file_size();
        if size > max_file_size {
            return Err(MfsError::FileTooLarge {
                size,
                max: max_file_size,
            });
        }
        self.directory.check_name(name)?;
        if self.directory.contains(name) {
            return Err(MfsError::AlreadyExists(name.to_string()));
        }
        if size == 0 {
            return Err(MfsError::EmptyFile);
        }

        let slot = self.index.allocate_slot()?;

        if let Err(e) = self.fill_chain(slot, &mut source, size) {
            let released = self.release_chain(slot);
            warn!(name, slot, released, error = %e, "put rolled back");
            return Err(e);
        }

        let record = FileRecord {
            name: name.to_string(),
            size,
            created: self.clock.now(),
            slot,
        };
        if let Err(e) = self.directory.insert(record) {
            self.release_chain(slot);
            return Err(e);
        }
        self.free_space -= size;

        debug!(
            name,
            size,
            slot,
            blocks = self.index.chain_of(slot).len(),
            free_space = self.free_space,
            "stored file"
        );
        Ok(())
    }

    /// Write the contents of `name` to `sink`, returning the byte count
    pub fn get<W: Write>(&self, name: &str, mut sink: W) -> Result<usize> {
        let record = self.directory.find(name)?;
        let block_size = self.config.block_size;

        let mut remaining = record.size;
        for &block in self.index.chain_of(record.slot) {
            let len = remaining.min(block_size);
            sink.write_all(&self.blocks.read(block)[..len])
                .map_err(MfsError::SinkWriteFailure)?;
            remaining -= len;
        }
        sink.flush().map_err(MfsError::SinkWriteFailure)?;

        debug_assert_eq!(remaining, 0, "chain of {} shorter than its size", name);
        Ok(record.size)
    }

    /// Read a whole file into memory
    pub fn read(&self, name: &str) -> Result<Bytes> {
        let size = self.directory.find(name)?.size;
        let mut writer = BytesMut::with_capacity(size).writer();
        self.get(name, &mut writer)?;
        Ok(writer.into_inner().freeze())
    }

    /// Remove `name`, releasing its blocks and slot
    pub fn delete(&mut self, name: &str) -> Result<FileRecord> {
        let record = self.directory.remove(name)?;
        let released = self.release_chain(record.slot);
        self.free_space += record.size;

        debug!(
            name,
            size = record.size,
            slot = record.slot,
            released,
            free_space = self.free_space,
            "deleted file"
        );
        Ok(record)
    }

    /// Stored files, most recently added first
    pub fn list(&self) -> Vec<&FileRecord> {
        self.directory.list()
    }

    /// Record for a single file
    pub fn stat(&self, name: &str) -> Result<&FileRecord> {
        self.directory.find(name)
    }

    /// Bytes still available for new files
    pub fn free_space(&self) -> usize {
        self.free_space
    }

    /// Blocks not owned by any file
    pub fn free_blocks(&self) -> usize {
        self.blocks.free_count()
    }

    /// Total bytes the store can hold
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    pub fn file_count(&self) -> usize {
        self.directory.len()
    }

    /// Blocks backing a file, in read order
    pub fn chain(&self, name: &str) -> Result<&[BlockId]> {
        let record = self.directory.find(name)?;
        Ok(self.index.chain_of(record.slot))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cross-check bitmap, chains, directory and the free-space counter
    pub fn verify(&self) -> Result<()> {
        let block_size = self.config.block_size;
        let mut owner: Vec<Option<SlotId>> = vec![None; self.blocks.num_blocks()];
        let mut chained = 0;

        for (slot, chain) in self.index.iter() {
            for &block in chain {
                if self.blocks.is_free(block) {
                    return Err(MfsError::InvariantViolation(format!(
                        "block {} in slot {} is marked free",
                        block, slot
                    )));
                }
                if let Some(other) = owner[block] {
                    return Err(MfsError::InvariantViolation(format!(
                        "block {} is chained by slots {} and {}",
                        block, other, slot
                    )));
                }
                owner[block] = Some(slot);
            }
            chained += chain.len();
        }

        if chained != self.blocks.used_count() {
            return Err(MfsError::InvariantViolation(format!(
                "{} blocks used but {} chained",
                self.blocks.used_count(),
                chained
            )));
        }

        let mut live_bytes = 0;
        for record in self.directory.list() {
            if !self.index.is_allocated(record.slot) {
                return Err(MfsError::InvariantViolation(format!(
                    "{} points at free slot {}",
                    record.name, record.slot
                )));
            }
            let expected = record.size.div_ceil(block_size);
            let actual = self.index.chain_of(record.slot).len();
            if expected != actual {
                return Err(MfsError::InvariantViolation(format!(
                    "{} has {} bytes but {} blocks",
                    record.name, record.size, actual
                )));
            }
            live_bytes += record.size;
        }

        if self.index.slots_in_use() != self.directory.len() {
            return Err(MfsError::InvariantViolation(format!(
                "{} slots claimed for {} files",
                self.index.slots_in_use(),
                self.directory.len()
            )));
        }

        if self.free_space != self.config.capacity() - live_bytes {
            return Err(MfsError::InvariantViolation(format!(
                "free space {} but {} bytes live of {}",
                self.free_space,
                live_bytes,
                self.config.capacity()
            )));
        }

        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Allocate and fill blocks for `size` bytes of `source` into `slot`
    fn fill_chain<R: Read>(&mut self, slot: SlotId, source: &mut R, size: usize) -> Result<()> {
        let block_size = self.config.block_size;
        let mut remaining = size;

        while remaining > 0 {
            let len = remaining.min(block_size);
            let block = self.blocks.allocate()?;

            // Chain the block before filling it so a failed read still releases it.
            if let Err(e) = self.index.append(slot, block) {
                self.blocks.free(block);
                return Err(e);
            }

            let buf = self.blocks.block_mut(block);
            source
                .read_exact(&mut buf[..len])
                .map_err(MfsError::SourceReadFailure)?;
            buf[len..].fill(0);

            remaining -= len;
        }

        Ok(())
    }

    /// Free every block chained in `slot` and clear it; returns the block count
    fn release_chain(&mut self, slot: SlotId) -> usize {
        let chain = self.index.clear(slot);
        for &block in &chain {
            self.blocks.free(block);
        }
        chain.len()
    }
}
