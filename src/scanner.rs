//! Non-recursive directory listing.

use crate::error::{OrganizeError, OrganizeResult};
use std::fs;
use std::path::{Path, PathBuf};

/// A single immediate child of the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The entry's file name (lossy UTF-8).
    pub name: String,
    /// Full path of the entry.
    pub path: PathBuf,
    /// Whether the entry itself is a directory. Symlinks are not followed.
    pub is_dir: bool,
}

/// Lists the immediate entries of `dir`, sorted by name.
///
/// Fails with [`OrganizeError::DirectoryAccess`] when `dir` does not exist, is
/// not a directory, or cannot be read.
pub fn read_entries(dir: &Path) -> OrganizeResult<Vec<DirectoryEntry>> {
    let access_error = |source| OrganizeError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(access_error)?
        .map(|entry| {
            let entry = entry.map_err(access_error)?;
            let file_type = entry.file_type().map_err(access_error)?;
            Ok(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_dir: file_type.is_dir(),
            })
        })
        .collect::<OrganizeResult<Vec<_>>>()?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("read {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}
