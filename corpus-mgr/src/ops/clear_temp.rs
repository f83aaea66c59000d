//! Scratch-directory clearing for long-term storage

use crate::corpus::{TEMP_DIR, TEMP_TRACKED_SET};
use crate::discovery;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of one temp-clearing run.
#[derive(Debug, Default)]
pub struct ClearReport {
    /// Recording directories whose `temp/` was cleared.
    pub processed: usize,
}

/// Remove the `temp/` subtree of every tracked recording under `root`.
///
/// Only directories with the full skeleton including `temp/` are
/// selected. Deletion is best-effort: a failure to remove one `temp/`
/// subtree is logged and does not stop the run. Safe to call repeatedly.
pub fn clear_temp(root: &Path) -> Result<ClearReport> {
    let recordings = discovery::discover(root, TEMP_TRACKED_SET)?;

    let mut report = ClearReport::default();
    for recording in &recordings {
        let temp_dir = recording.path().join(TEMP_DIR);
        if let Err(e) = fs::remove_dir_all(&temp_dir) {
            debug!("Could not remove {}: {}", temp_dir.display(), e);
        }
        info!("Processed {}", recording.path().display());
        report.processed += 1;
    }

    Ok(report)
}
