//! JSON Hashfile Adapter
//!
//! Reads the operator-supplied override file:
//!
//! ```json
//! { "hashlines": [ { "height": 500000, "hash": "<64 hex chars>" } ] }
//! ```

use crate::error::{CheckpointError, CheckpointResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// One record of the override file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLine {
    pub height: u64,
    pub hash: String,
    /// Decimal cumulative difficulty, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Parsed override file, records in file order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFile {
    pub hashlines: Vec<HashLine>,
}

impl HashFile {
    /// Parse the JSON text of an override file.
    pub fn from_json(path: &Path, contents: &str) -> CheckpointResult<Self> {
        serde_json::from_str(contents).map_err(|e| {
            error!("[qc-18] Error loading checkpoints from {}: {}", path.display(), e);
            CheckpointError::FileParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }
}

/// Read and parse the override file at `path`.
///
/// Returns `Ok(None)` when no file exists there.
pub fn read_hashfile(path: &Path) -> CheckpointResult<Option<HashFile>> {
    if !path.exists() {
        debug!("[qc-18] Blockchain checkpoints file not found: {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        error!("[qc-18] Error reading checkpoints from {}: {}", path.display(), e);
        CheckpointError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    HashFile::from_json(path, &contents).map(Some)
}
