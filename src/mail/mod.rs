//! Spam mail reading and URL collection.
//!
//! This module walks a mail directory (one message per file), decodes each
//! message on a best-effort basis and collects the URLs it references:
//! - `decode` - base64 body decoding
//! - `extract` - URL token matching
//!
//! Individual files that cannot be read are skipped with a reason; they never
//! abort the scan.

mod decode;
mod extract;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error_handling::{ProcessingStats, SkipReason};

// Re-export public API
pub use decode::decode_mail;
pub use extract::{extract_urls, extract_urls_into};

/// Outcome of reading one mail file.
#[derive(Debug)]
pub enum MailRead {
    /// The file was read; holds the decoded text.
    Text(String),
    /// The file was skipped.
    Skipped(SkipReason),
}

/// URLs collected from a mail directory, plus bookkeeping for the report.
#[derive(Debug, Default)]
pub struct MailScan {
    /// Distinct URL tokens across all mails
    pub urls: HashSet<String>,
    /// Number of mail files read successfully
    pub mails_read: usize,
    /// Skip counters per category
    pub stats: ProcessingStats,
}

impl MailScan {
    /// Number of mail files that were skipped.
    pub fn mails_skipped(&self) -> usize {
        self.stats.total_skips()
    }
}

/// Reads and decodes a single mail file.
///
/// The content is decoded as UTF-8 with invalid sequences replaced, then passed
/// through [`decode_mail`].
pub fn read_mail(path: &Path) -> MailRead {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => return MailRead::Skipped(SkipReason::NotAFile),
        Ok(_) => {}
        Err(e) => return MailRead::Skipped(SkipReason::Read(e)),
    }

    match fs::read(path) {
        Ok(bytes) => MailRead::Text(decode_mail(&String::from_utf8_lossy(&bytes))),
        Err(e) => MailRead::Skipped(SkipReason::Read(e)),
    }
}

/// Collects URLs from every file directly inside `maildir`.
///
/// A missing or unreadable directory yields an empty scan (with a warning);
/// subdirectories are not descended into.
pub fn scan_maildir(maildir: &Path) -> MailScan {
    let mut scan = MailScan::default();

    let entries = match fs::read_dir(maildir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read mail directory {}: {e}", maildir.display());
            return scan;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", maildir.display());
                None
            }
        })
        .collect();
    paths.sort();

    for path in paths {
        match read_mail(&path) {
            MailRead::Text(text) => {
                let found = extract_urls_into(&text, &mut scan.urls);
                debug!("{}: {found} URL(s)", path.display());
                scan.mails_read += 1;
            }
            MailRead::Skipped(reason) => {
                debug!("Skipping {}: {reason}", path.display());
                scan.stats.increment_skip(reason.kind());
            }
        }
    }

    scan
}
