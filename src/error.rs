//! Error types for mfs
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MfsError
pub type Result<T> = std::result::Result<T, MfsError>;

/// Unified error type for mfs operations
///
/// Every variant except `InvariantViolation` is recoverable: the engine
/// operation that returned it left the store exactly as it found it.
#[derive(Debug, Error)]
pub enum MfsError {
    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("not enough free space: requested {requested} bytes, {available} available")]
    InsufficientSpace { requested: usize, available: usize },

    #[error("file too large: {size} bytes exceeds the {max} byte limit")]
    FileTooLarge { size: usize, max: usize },

    #[error("no free file slot available")]
    NoSlotAvailable,

    #[error("block chain for slot {slot} is full")]
    ChainFull { slot: usize },

    #[error("no free block available")]
    Exhausted,

    // -------------------------------------------------------------------------
    // Naming Errors
    // -------------------------------------------------------------------------
    #[error("file name too long: {len} bytes exceeds the {max} byte limit")]
    NameTooLong { len: usize, max: usize },

    #[error("file name must not be empty")]
    InvalidName,

    #[error("file already exists: {0}")]
    AlreadyExists(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("empty files are not supported")]
    EmptyFile,

    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    #[error("failed to read from source: {0}")]
    SourceReadFailure(#[source] std::io::Error),

    #[error("failed to write to sink: {0}")]
    SinkWriteFailure(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Consistency Errors
    // -------------------------------------------------------------------------
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
