//! Flat-folder import into the corpus skeleton

use crate::corpus::{self, RAW_DIR, SKELETON};
use crate::error::{ManagerError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Recording IDs processed, in source-name order.
    pub imported: Vec<String>,
    /// Source entries ignored (unrecognized extension or not a file).
    pub skipped: usize,
}

/// Import a flat folder of audio files into `data_root`.
///
/// The source folder is expected to contain only loose audio files;
/// entries without a recognized audio extension are ignored. For each
/// recognized file the full recording skeleton is created (idempotently)
/// and the source is copied into `raw/`. Re-running on the same source is
/// safe: the skeleton is untouched and the raw copy is overwritten.
pub fn import_folder(source: &Path, data_root: &Path) -> Result<ImportReport> {
    if !source.exists() {
        return Err(ManagerError::PathNotFound(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(ManagerError::NotADirectory(source.to_path_buf()));
    }

    let mut entries: Vec<_> = fs::read_dir(source)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = ImportReport::default();
    for entry in entries {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            report.skipped += 1;
            continue;
        };
        if !entry.file_type()?.is_file() || !corpus::is_audio_file_name(name) {
            report.skipped += 1;
            continue;
        }

        let id = corpus::recording_id(name);
        let recording_dir = data_root.join(&id);
        for subdir in SKELETON {
            fs::create_dir_all(recording_dir.join(subdir))?;
        }
        fs::copy(entry.path(), recording_dir.join(RAW_DIR).join(name))?;

        info!("Processed {}", id);
        report.imported.push(id);
    }

    Ok(report)
}
