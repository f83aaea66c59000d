//! Recording-directory discovery
//!
//! Shared scan primitive for the bookkeeping operations: walk a tree and
//! select the directories whose immediate children include every required
//! skeleton name. Directories missing any required child are invisible to
//! the caller, not errors.

use crate::corpus::Recording;
use crate::error::{ManagerError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Recursively discover recording directories under `root`.
///
/// `required` is the set of immediate child directory names a candidate
/// must have. Results are deduplicated and in ascending path order. The
/// root itself is a candidate. Fails if `root` does not exist or is not a
/// directory; unreadable entries below the root are logged and skipped.
pub fn discover(root: &Path, required: &[&str]) -> Result<Vec<Recording>> {
    if !root.exists() {
        return Err(ManagerError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ManagerError::NotADirectory(root.to_path_buf()));
    }

    let mut found: BTreeSet<PathBuf> = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error accessing entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        if required.iter().all(|name| dir.join(name).is_dir()) {
            found.insert(dir.to_path_buf());
        }
    }

    Ok(found.into_iter().map(Recording::new).collect())
}
