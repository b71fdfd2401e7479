//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, timeouts, patterns)
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel};
