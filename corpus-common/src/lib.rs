//! # Corpus Common Library
//!
//! Shared code for the corpus directory tools:
//! - Error types
//! - Data-root resolution and bootstrap configuration
//! - Exact audio-duration arithmetic
//! - Human-readable time decomposition

pub mod config;
pub mod error;
pub mod human_time;
pub mod timing;

pub use error::{Error, Result};
