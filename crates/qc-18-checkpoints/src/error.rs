//! Error types for the Checkpoints subsystem

use crate::domain::{Difficulty, Hash};
use std::path::PathBuf;
use thiserror::Error;

/// Checkpoints subsystem errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Hash string is not valid hex or has the wrong length
    #[error("Failed to decode checkpoint hash {input:?}: {reason}")]
    HashDecode { input: String, reason: String },

    /// Difficulty string is not a valid decimal integer
    #[error("Failed to decode difficulty checkpoint {input:?}")]
    DifficultyDecode { input: String },

    /// A different hash is already pinned at this height
    #[error(
        "Checkpoint at height {height} already exists with hash {}, refusing {}",
        hex::encode(existing),
        hex::encode(incoming)
    )]
    HashConflict {
        height: u64,
        existing: Hash,
        incoming: Hash,
    },

    /// A different difficulty is already pinned at this height
    #[error(
        "Difficulty checkpoint at height {height} already exists with {existing}, refusing {incoming}"
    )]
    DifficultyConflict {
        height: u64,
        existing: Difficulty,
        incoming: Difficulty,
    },

    /// Override file could not be read or parsed
    #[error("Failed to load checkpoints file {}: {reason}", path.display())]
    FileParse { path: PathBuf, reason: String },

    /// No TXT records could be resolved
    #[error("DNS checkpoints unavailable: {reason}")]
    DnsUnavailable { reason: String },

    /// Candidate block hash disagrees with the pinned checkpoint
    #[error(
        "Checkpoint failed for height {height}: expected {}, fetched {}",
        hex::encode(expected),
        hex::encode(actual)
    )]
    CheckpointMismatch {
        height: u64,
        expected: Hash,
        actual: Hash,
    },

    /// Configuration rejected by validation
    #[error("Invalid checkpoint configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl CheckpointError {
    /// True for the two cross-source disagreement kinds.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CheckpointError::HashConflict { .. } | CheckpointError::DifficultyConflict { .. }
        )
    }

    /// Height the error refers to, when there is one.
    pub fn height(&self) -> Option<u64> {
        match self {
            CheckpointError::HashConflict { height, .. }
            | CheckpointError::DifficultyConflict { height, .. }
            | CheckpointError::CheckpointMismatch { height, .. } => Some(*height),
            _ => None,
        }
    }
}

/// Result type for checkpoint operations
pub type CheckpointResult<T> = Result<T, CheckpointError>;
