//! Old-to-new intra-directory naming migration
//!
//! An earlier importer suffixed stage outputs with `-resampled` /
//! `-diarize`; the current convention names every stage file after the
//! recording ID alone. Each rename is independently conditional on the
//! old name existing, so partially-processed recordings migrate whatever
//! stages they have.

use crate::corpus::{DIARIZATION_DIR, GOOGLEAPI_DIR, RESAMPLED_DIR, TEXTGRID_DIR, TRANSCRIPT_DIR};
use crate::error::{ManagerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one migration run.
#[derive(Debug, Default)]
pub struct MigrateReport {
    /// Immediate child directories visited.
    pub processed: usize,
    /// Stage files actually renamed.
    pub renamed: usize,
}

/// Migrate every immediate child directory of `root` from the old naming
/// convention to the current one.
///
/// A missing old-convention file means that stage is skipped for that
/// recording. An already-existing target name is a hard error; nothing is
/// overwritten.
pub fn migrate(root: &Path) -> Result<MigrateReport> {
    if !root.exists() {
        return Err(ManagerError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ManagerError::NotADirectory(root.to_path_buf()));
    }

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = MigrateReport::default();
    for entry in entries {
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let dir = entry.path();
        let id = entry.file_name().to_string_lossy().into_owned();

        for (old, new) in stage_renames(&dir, &id) {
            if !old.exists() {
                continue;
            }
            if new.exists() {
                return Err(ManagerError::RenameTargetExists(new));
            }
            fs::rename(&old, &new)?;
            report.renamed += 1;
        }

        info!("Processed {}", id);
        report.processed += 1;
    }

    Ok(report)
}

/// The four old/new stage-file name pairs for a recording directory.
fn stage_renames(dir: &Path, id: &str) -> [(PathBuf, PathBuf); 4] {
    let resampled = dir.join(RESAMPLED_DIR);
    let diarization = dir.join(DIARIZATION_DIR);
    let googleapi = dir.join(TRANSCRIPT_DIR).join(GOOGLEAPI_DIR);
    let textgrid = dir.join(TRANSCRIPT_DIR).join(TEXTGRID_DIR);

    [
        (
            resampled.join(format!("{id}-resampled.wav")),
            resampled.join(format!("{id}.wav")),
        ),
        (
            diarization.join(format!("{id}-diarize.seg")),
            diarization.join(format!("{id}.seg")),
        ),
        (
            googleapi.join(format!("{id}-diarize.txt")),
            googleapi.join(format!("{id}.txt")),
        ),
        (
            textgrid.join(format!("{id}-diarize.TextGrid")),
            textgrid.join(format!("{id}.TextGrid")),
        ),
    ]
}
