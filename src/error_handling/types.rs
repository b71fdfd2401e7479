//! Error type definitions.
//!
//! This module defines the error types surfaced by initialization and storage,
//! and the reasons a mail file can be skipped during a scan.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for whitelist and blocklist file operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A list file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The directory holding the output file could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the blocklist contents failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The finished temporary file could not replace the output file.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// Destination file
        path: PathBuf,
        /// Underlying persist error
        #[source]
        source: tempfile::PersistError,
    },
}

/// Categories of per-file skips while reading the mail directory.
///
/// Skips never abort a scan; they are counted and reported at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipKind {
    /// The directory entry is not a regular file (subdirectory, socket, ...)
    NotAFile,
    /// The file could not be opened or read
    ReadError,
}

impl SkipKind {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipKind::NotAFile => "not a regular file",
            SkipKind::ReadError => "read error",
        }
    }
}

/// Why a single mail file was skipped.
#[derive(Error, Debug)]
pub enum SkipReason {
    /// The directory entry is not a regular file.
    #[error("not a regular file")]
    NotAFile,

    /// The file could not be read.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
}

impl SkipReason {
    /// Category of this skip, for statistics.
    pub fn kind(&self) -> SkipKind {
        match self {
            SkipReason::NotAFile => SkipKind::NotAFile,
            SkipReason::Read(_) => SkipKind::ReadError,
        }
    }
}
