//! Test corpus builders and audio fixture generation
#![allow(dead_code)]

use hound::{WavSpec, WavWriter};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a recording directory with the four tracked subdirectories
/// (`raw`, `resampled`, `diarization`, `transcript`).
pub fn make_tracked_recording(root: &Path, id: &str) -> PathBuf {
    let dir = root.join(id);
    for sub in ["raw", "resampled", "diarization", "transcript"] {
        fs::create_dir_all(dir.join(sub)).unwrap();
    }
    dir
}

/// Create a recording directory with the complete skeleton, including the
/// transcript subdirectories and `temp/`.
pub fn make_full_recording(root: &Path, id: &str) -> PathBuf {
    let dir = make_tracked_recording(root, id);
    for sub in ["transcript/googleapi", "transcript/textgrid", "temp"] {
        fs::create_dir_all(dir.join(sub)).unwrap();
    }
    dir
}

/// Write a silent 16-bit mono WAV holding exactly `frames` sample frames
/// at `sample_rate` Hz.
pub fn generate_silent_wav(path: &Path, frames: u64, sample_rate: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).unwrap();
    for _ in 0..frames {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}
