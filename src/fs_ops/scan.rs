//! Directory snapshot: the regular files directly inside the target directory.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::OrganizeError;

/// One regular file in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path; moves always use this, never the lossy names below.
    pub path: PathBuf,
    pub file_name: String,
    /// File name without its last extension.
    pub stem: String,
}

impl FileEntry {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
            stem,
        }
    }
}

/// List the regular files directly under `dir`, sorted by file name.
///
/// Directories, symlinks and special files are skipped. Entries that cannot
/// be inspected are logged and skipped; only an unreadable `dir` is an error.
pub fn scan_directory(dir: &Path) -> Result<Vec<FileEntry>, OrganizeError> {
    if !dir.is_dir() {
        return Err(OrganizeError::InvalidDirectory(dir.to_path_buf()));
    }

    // readability probe
    fs::read_dir(dir).map_err(|source| OrganizeError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        match item {
            Ok(e) => {
                let ft = e.file_type();
                if ft.is_file() {
                    entries.push(FileEntry::from_path(e.path()));
                } else {
                    debug!(
                        path = %e.path().display(),
                        symlink = ft.is_symlink(),
                        dir = ft.is_dir(),
                        "Skipping non-regular entry"
                    );
                }
            }
            Err(err) => {
                warn!(error = %err, "Skipping entry that could not be inspected");
            }
        }
    }

    debug!(dir = %dir.display(), files = entries.len(), "Scanned directory");
    Ok(entries)
}
