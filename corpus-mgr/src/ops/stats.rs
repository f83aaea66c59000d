//! Aggregate completion statistics
//!
//! Total audio time is the sum of the resampled stage outputs, read from
//! the WAV headers and accumulated exactly (frames over sample rate) so
//! the aggregate carries no floating-point drift.

use crate::corpus::TRACKED_SET;
use crate::discovery;
use crate::error::{ManagerError, Result};
use corpus_common::human_time;
use corpus_common::timing::ExactSeconds;
use std::path::Path;
use tracing::info;

/// Aggregate statistics over a corpus tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReport {
    /// Recordings with a completed resampling stage.
    pub completed: usize,
    pub hours: u64,
    pub minutes: u64,
    /// Seconds below one minute, including the fractional remainder.
    pub seconds: f64,
}

/// Aggregate resampled-audio duration and completed count under `root`.
///
/// Recordings whose `resampled/` holds zero or multiple files contribute
/// nothing. The resampled output contract is WAV; a file the WAV reader
/// cannot parse aborts the run.
pub fn stats(root: &Path) -> Result<StatsReport> {
    let recordings = discovery::discover(root, TRACKED_SET)?;

    let mut completed = 0usize;
    let mut total = ExactSeconds::ZERO;
    for recording in &recordings {
        let status = recording.inspect()?;
        let Some(wav_path) = status.resampled.completed_file() else {
            continue;
        };

        let reader = hound::WavReader::open(wav_path).map_err(|source| {
            ManagerError::WavHeader {
                path: wav_path.to_path_buf(),
                source,
            }
        })?;
        let frames = u64::from(reader.duration());
        let rate = reader.spec().sample_rate;

        total += ExactSeconds::from_frames(frames, rate);
        completed += 1;
    }

    let parts = human_time::decompose(total);
    info!(
        "Processed {} files, total time {}.",
        completed,
        human_time::format_hms(&parts)
    );

    Ok(StatsReport {
        completed,
        hours: parts.hours,
        minutes: parts.minutes,
        seconds: parts.seconds,
    })
}
