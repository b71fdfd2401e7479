//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and list file storage
//! - Per-file skip reasons for the mail scan
//! - Skip statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{InitializationError, SkipKind, SkipReason, StorageError};
