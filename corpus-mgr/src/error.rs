//! Error types for corpus-mgr

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Corpus operation errors
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Migration rename would clobber an existing file
    #[error("Rename target already exists: {0}")]
    RenameTargetExists(PathBuf),

    /// Resampled audio file could not be read as WAV
    #[error("Failed to read WAV header {path}: {source}")]
    WavHeader {
        path: PathBuf,
        source: hound::Error,
    },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Common error
    #[error("Common error: {0}")]
    Common(#[from] corpus_common::Error),
}
