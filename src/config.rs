//! Configuration for mfs
//!
//! Centralized configuration with the classic 5 MiB layout as defaults.

use crate::error::{MfsError, Result};

/// Geometry and limits of an mfs instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Block Store Configuration
    // -------------------------------------------------------------------------
    /// Number of blocks carved out of the memory region
    pub num_blocks: usize,

    /// Size of each block in bytes (the allocation granularity)
    pub block_size: usize,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Number of chain slots, i.e. the maximum number of live files
    pub max_files: usize,

    /// Maximum number of blocks in one chain
    pub max_blocks_per_file: usize,

    // -------------------------------------------------------------------------
    // Directory Configuration
    // -------------------------------------------------------------------------
    /// Maximum file name length in bytes
    pub max_name_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_blocks: 1280,
            block_size: 4096,
            max_files: 128,
            max_blocks_per_file: 32,
            max_name_len: 255,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Total number of data bytes the store can hold
    pub fn capacity(&self) -> usize {
        self.num_blocks * self.block_size
    }

    /// Largest file a single chain can describe
    pub fn max_file_size(&self) -> usize {
        self.max_blocks_per_file * self.block_size
    }

    /// Reject geometries the engine cannot operate on
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("num_blocks", self.num_blocks),
            ("block_size", self.block_size),
            ("max_files", self.max_files),
            ("max_blocks_per_file", self.max_blocks_per_file),
            ("max_name_len", self.max_name_len),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(MfsError::Config(format!("{} must be greater than zero", name)));
            }
        }

        self.num_blocks
            .checked_mul(self.block_size)
            .ok_or_else(|| MfsError::Config("num_blocks * block_size overflows".to_string()))?;
        self.max_blocks_per_file
            .checked_mul(self.block_size)
            .ok_or_else(|| {
                MfsError::Config("max_blocks_per_file * block_size overflows".to_string())
            })?;

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of blocks
    pub fn num_blocks(mut self, count: usize) -> Self {
        self.config.num_blocks = count;
        self
    }

    /// Set the block size (in bytes)
    pub fn block_size(mut self, size: usize) -> Self {
        self.config.block_size = size;
        self
    }

    /// Set the number of chain slots
    pub fn max_files(mut self, count: usize) -> Self {
        self.config.max_files = count;
        self
    }

    /// Set the per-file block ceiling
    pub fn max_blocks_per_file(mut self, count: usize) -> Self {
        self.config.max_blocks_per_file = count;
        self
    }

    /// Set the maximum file name length (in bytes)
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.config.max_name_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
