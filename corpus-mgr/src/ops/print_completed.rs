//! Fully-transcribed recording listing

use crate::corpus::TRACKED_SET;
use crate::discovery;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one completion-listing run.
#[derive(Debug, Default)]
pub struct CompletedReport {
    /// Completed recording directories, in ascending path order.
    pub completed: Vec<PathBuf>,
}

/// List recordings under `root` whose aligned transcript is done.
///
/// A recording qualifies when `transcript/textgrid/` holds exactly one
/// file. Qualifying paths are printed to stdout, one per line, in
/// ascending path order.
pub fn print_completed(root: &Path) -> Result<CompletedReport> {
    let recordings = discovery::discover(root, TRACKED_SET)?;

    let mut report = CompletedReport::default();
    for recording in recordings {
        let status = recording.inspect()?;
        if status.textgrid.is_complete() {
            println!("{}", recording.path().display());
            report.completed.push(recording.path().to_path_buf());
        }
    }

    info!("{} recordings completed.", report.completed.len());
    Ok(report)
}
