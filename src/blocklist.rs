//! Blocklist persistence.
//!
//! The blocklist file holds one lowercase domain per line, sorted, without
//! duplicates. Every run unions its new domains into whatever is already on
//! disk and rewrites the whole file, so entries are never dropped by a run.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error_handling::StorageError;

/// Loads the existing blocklist at `path`.
///
/// A missing file is an empty blocklist. Lines are trimmed and lowercased;
/// blank lines are ignored.
///
/// # Errors
///
/// Returns `StorageError::Read` if the file exists but cannot be read.
pub fn load_blocklist(path: &Path) -> Result<BTreeSet<String>, StorageError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No existing blocklist at {}", path.display());
            return Ok(BTreeSet::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Writes `domains` to `path`, one per line in ascending order.
///
/// Parent directories are created as needed. The content goes to a temporary
/// file next to the destination first and then replaces it, so a failed write
/// leaves the previous blocklist intact.
///
/// If `path` is a symlink, the file it points to is replaced and the link is
/// kept. The replaced file keeps its permissions; a new file gets `0644` so
/// the blocker reading it (usually another user) can open it.
///
/// # Errors
///
/// Returns a `StorageError` if the directory cannot be created or the file
/// cannot be written or replaced.
pub fn write_blocklist(path: &Path, domains: &BTreeSet<String>) -> Result<(), StorageError> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    // Resolves symlinks; a path that does not exist yet is written as given
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };

    let write_err = |source| StorageError::Write {
        path: target.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(parent_dir(&target)).map_err(write_err)?;
    {
        let mut writer = io::BufWriter::new(file.as_file_mut());
        for domain in domains {
            writeln!(writer, "{domain}").map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
    }
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }

    file.persist(&target).map_err(|source| StorageError::Persist {
        path: target.clone(),
        source,
    })?;
    debug!("Wrote {} domain(s) to {}", domains.len(), target.display());
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Summary of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Entries in the file before the merge
    pub previous: usize,
    /// Entries in the file after the merge
    pub total: usize,
}

impl MergeOutcome {
    /// Number of domains this merge added.
    pub fn added(&self) -> usize {
        self.total - self.previous
    }
}

/// Unions `new_domains` into the blocklist at `path` and rewrites it.
///
/// # Errors
///
/// Returns a `StorageError` if the existing file cannot be read or the merged
/// list cannot be written.
pub fn merge_blocklist<'a>(
    path: &Path,
    new_domains: impl IntoIterator<Item = &'a String>,
) -> Result<MergeOutcome, StorageError> {
    let mut merged = load_blocklist(path)?;
    let previous = merged.len();
    merged.extend(new_domains.into_iter().cloned());

    write_blocklist(path, &merged)?;
    Ok(MergeOutcome {
        previous,
        total: merged.len(),
    })
}
