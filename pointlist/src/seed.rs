//! Initial task list loaded from a JSON file.
//!
//! The file holds an array of `{"name": ..., "points": ...}` records. It is
//! only read at startup; nothing is ever written back.

use std::path::{Path, PathBuf};

use pointlist_core::Task;

/// Errors that can occur when loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Failed to read the seed file.
    #[error("failed to read seed file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a JSON array of task records.
    #[error("failed to parse seed file {path}: {source}")]
    ParseJson {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Parses seed tasks from JSON text.
///
/// # Errors
///
/// Returns the JSON error if `json` is not an array of task records.
pub fn parse_seed(json: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads and parses the seed file at `path`.
///
/// # Errors
///
/// Returns [`SeedError::ReadFile`] if the file cannot be read, or
/// [`SeedError::ParseJson`] if its contents are not valid task records.
pub fn load_seed(path: &Path) -> Result<Vec<Task>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let tasks = parse_seed(&contents).map_err(|e| SeedError::ParseJson {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), count = tasks.len(), "loaded seed tasks");
    Ok(tasks)
}
