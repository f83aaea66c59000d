//! Recording directory model
//!
//! A recording's pipeline progress is encoded entirely by its directory
//! layout: which skeleton subdirectories exist and how many files each
//! stage directory holds. This module makes that state machine explicit so
//! every operation consumes the same classification instead of re-probing
//! the filesystem its own way.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Original ingested audio
pub const RAW_DIR: &str = "raw";
/// Pipeline-resampled audio (exactly one file once resampling is done)
pub const RESAMPLED_DIR: &str = "resampled";
/// Speaker-segmentation output
pub const DIARIZATION_DIR: &str = "diarization";
/// Transcription outputs (contains `googleapi/` and `textgrid/`)
pub const TRANSCRIPT_DIR: &str = "transcript";
/// Raw transcription output, under `transcript/`
pub const GOOGLEAPI_DIR: &str = "googleapi";
/// Aligned transcript output, under `transcript/` (exactly one file once done)
pub const TEXTGRID_DIR: &str = "textgrid";
/// Scratch workspace for external pipeline stages, disposable
pub const TEMP_DIR: &str = "temp";

/// Immediate children a directory must have to be tracked by the
/// bookkeeping operations.
pub const TRACKED_SET: &[&str] = &[RAW_DIR, RESAMPLED_DIR, DIARIZATION_DIR, TRANSCRIPT_DIR];

/// Tracked set for temp-clearing; `temp/` must also be present.
pub const TEMP_TRACKED_SET: &[&str] = &[
    RAW_DIR,
    RESAMPLED_DIR,
    DIARIZATION_DIR,
    TRANSCRIPT_DIR,
    TEMP_DIR,
];

/// Subdirectories the importer creates for a new recording, relative to
/// the recording directory.
pub const SKELETON: &[&str] = &[
    "raw",
    "resampled",
    "diarization",
    "transcript/googleapi",
    "transcript/textgrid",
    "temp",
];

/// Recognized audio extensions for import
pub const AUDIO_EXTS: &[&str] = &["wav", "mp3"];

/// Check whether a file name carries a recognized audio extension.
pub fn is_audio_file_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Derive the stable recording ID from a source file name.
///
/// The extension is stripped before slugification; the result is the
/// recording's directory name for its entire lifetime.
pub fn recording_id(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    slug::slugify(stem)
}

/// Contents of one pipeline stage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageState {
    /// Zero files; the stage has not produced output yet.
    NotStarted,
    /// Exactly one file; the stage is complete.
    Complete(PathBuf),
    /// More than one file; treated as incomplete.
    Ambiguous(usize),
}

impl StageState {
    /// The single output file, if the stage is complete.
    pub fn completed_file(&self) -> Option<&Path> {
        match self {
            StageState::Complete(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, StageState::Complete(_))
    }
}

/// Structured pipeline status of one recording.
#[derive(Debug, Clone)]
pub struct RecordingStatus {
    pub resampled: StageState,
    pub textgrid: StageState,
}

/// One tracked recording directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Recording {
    path: PathBuf,
}

impl Recording {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The recording ID, i.e. the directory name.
    pub fn id(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Classify the completion-relevant stage directories.
    ///
    /// A missing stage directory classifies as [`StageState::NotStarted`];
    /// "not yet produced" is a normal state, not an error. Ambiguous
    /// stages (more than one file) are logged and treated as incomplete.
    pub fn inspect(&self) -> Result<RecordingStatus> {
        Ok(RecordingStatus {
            resampled: self.classify(self.path.join(RESAMPLED_DIR), RESAMPLED_DIR)?,
            textgrid: self.classify(
                self.path.join(TRANSCRIPT_DIR).join(TEXTGRID_DIR),
                TEXTGRID_DIR,
            )?,
        })
    }

    fn classify(&self, dir: PathBuf, label: &str) -> Result<StageState> {
        let state = classify_stage(&dir)?;
        if let StageState::Ambiguous(count) = state {
            warn!(
                "{}: {} files in {}/ where one was expected, treating as incomplete",
                self.path.display(),
                count,
                label
            );
        }
        Ok(state)
    }
}

/// Classify a stage directory by the number of entries it holds.
fn classify_stage(dir: &Path) -> Result<StageState> {
    let entries = match fs::read_dir(dir) {
        Ok(iter) => iter,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StageState::NotStarted),
        Err(e) => return Err(e.into()),
    };

    let mut paths = Vec::new();
    for entry in entries {
        paths.push(entry?.path());
    }

    match paths.len() {
        0 => Ok(StageState::NotStarted),
        1 => Ok(StageState::Complete(paths.remove(0))),
        n => Ok(StageState::Ambiguous(n)),
    }
}
