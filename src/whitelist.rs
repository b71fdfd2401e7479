//! Whitelist loading and matching.
//!
//! The whitelist is a plain text file with one domain per line. A domain is
//! whitelisted when it equals an entry or is a subdomain of one.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error_handling::StorageError;

/// Domains that must never end up in the blocklist.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    entries: HashSet<String>,
}

impl Whitelist {
    /// Builds a whitelist from raw lines, normalizing each entry.
    ///
    /// Lines are trimmed and lowercased; blank lines and `#` comments are
    /// ignored; a literal leading `www.` is removed.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = lines
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| match line.strip_prefix("www.") {
                Some(rest) => rest.to_string(),
                None => line,
            })
            .filter(|entry| !entry.is_empty())
            .collect();
        Whitelist { entries }
    }

    /// Loads the whitelist file at `path`.
    ///
    /// A missing file is an empty whitelist, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Read` if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No whitelist at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::from_lines(text.lines()))
    }

    /// Returns `true` if `domain` equals an entry or ends with `.` + entry.
    pub fn contains(&self, domain: &str) -> bool {
        self.entries.iter().any(|entry| {
            domain == entry
                || domain
                    .strip_suffix(entry.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the whitelist has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
