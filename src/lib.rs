//! # mfs
//!
//! A volatile, fixed-capacity file store held entirely in memory:
//! - One flat region split into fixed-size blocks
//! - A free-block bitmap with lowest-index-first allocation
//! - A per-file chain of block ids (extent list) in a fixed slot table
//! - A flat directory of named file records
//!
//! Nothing is persisted; all state lives and dies with the `Engine`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Shell                               │
//! │            (put / get / del / list / df / quit)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Engine                               │
//! │          (validation, copy, rollback, free space)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────┐
//!          │            │                 │
//!          ▼            ▼                 ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │  Directory  │ │ ChainIndex  │ │ BlockStore  │
//!   │ name → file │ │ slot → ids  │ │ bitmap+data │
//!   └─────────────┘ └─────────────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod block;
pub mod index;
pub mod directory;
pub mod clock;
pub mod engine;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MfsError, Result};
pub use config::Config;
pub use engine::Engine;
pub use directory::FileRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mfs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
