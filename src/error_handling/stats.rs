//! Processing statistics tracking.
//!
//! Counts how many mail files were skipped, per skip category. A scan is
//! sequential, so plain counters are enough.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::types::SkipKind;

/// Per-category skip counters for one scan.
///
/// All categories are initialized to zero on creation so that statistics
/// output always lists every category.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    skips: HashMap<SkipKind, usize>,
}

impl ProcessingStats {
    /// Creates a tracker with every skip category at zero.
    pub fn new() -> Self {
        let skips = SkipKind::iter().map(|kind| (kind, 0)).collect();
        ProcessingStats { skips }
    }

    /// Increment the counter for a skip category.
    pub fn increment_skip(&mut self, kind: SkipKind) {
        *self.skips.entry(kind).or_insert(0) += 1;
    }

    /// Get the count for a skip category.
    pub fn get_skip_count(&self, kind: SkipKind) -> usize {
        self.skips.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of skipped files across all categories.
    pub fn total_skips(&self) -> usize {
        self.skips.values().sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
