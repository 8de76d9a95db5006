//! # Boundary Policy
//!
//! Read-only queries the consensus engine runs against the store on every
//! incoming block and during reorg evaluation.

use super::store::CheckpointStore;
use super::value_objects::Hash;
use crate::error::{CheckpointError, CheckpointResult};
use tracing::{error, info};

/// Outcome of checking a block against the checkpoint at its height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointVerdict {
    /// No checkpoint at this height; no opinion.
    NotACheckpoint,
    /// Block hash equals the pinned hash.
    Match,
    /// Block hash differs from the pinned hash. The block must be rejected.
    Mismatch { expected: Hash },
}

impl CheckpointVerdict {
    pub fn is_a_checkpoint(&self) -> bool {
        !matches!(self, CheckpointVerdict::NotACheckpoint)
    }

    /// False only for [`CheckpointVerdict::Mismatch`].
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, CheckpointVerdict::Mismatch { .. })
    }

    /// Turn a mismatch into [`CheckpointError::CheckpointMismatch`].
    pub fn into_result(self, height: u64, actual: Hash) -> CheckpointResult<Self> {
        match self {
            CheckpointVerdict::Mismatch { expected } => Err(CheckpointError::CheckpointMismatch {
                height,
                expected,
                actual,
            }),
            verdict => Ok(verdict),
        }
    }
}

impl CheckpointStore {
    /// True iff the store is non-empty and `height` is at or below the
    /// highest checkpoint.
    pub fn in_checkpoint_zone(&self, height: u64) -> bool {
        !self.is_empty() && height <= self.max_checkpointed_height()
    }

    /// Compare `candidate` with the checkpoint pinned at `height`.
    pub fn verify(&self, height: u64, candidate: &Hash) -> CheckpointVerdict {
        let Some(expected) = self.query_at(height) else {
            return CheckpointVerdict::NotACheckpoint;
        };

        if expected == *candidate {
            info!(
                "[qc-18] CHECKPOINT PASSED FOR HEIGHT {} {}",
                height,
                hex::encode(candidate)
            );
            CheckpointVerdict::Match
        } else {
            error!(
                "[qc-18] CHECKPOINT FAILED FOR HEIGHT {}. EXPECTED HASH: {}, FETCHED HASH: {}",
                height,
                hex::encode(expected),
                hex::encode(candidate)
            );
            CheckpointVerdict::Mismatch { expected }
        }
    }

    /// Reorg gate: may a competing branch fork at `fork_height` while the
    /// local chain is at `chain_height`?
    ///
    /// A fork is only allowed strictly after the latest checkpoint at or
    /// below `chain_height`. Before the first checkpoint anything goes,
    /// except the unknown fork height 0.
    pub fn alternative_branch_allowed(&self, chain_height: u64, fork_height: u64) -> bool {
        if fork_height == 0 {
            return false;
        }

        // predecessor of upper_bound(chain_height)
        match self.points().range(..=chain_height).next_back() {
            None => true,
            Some((checkpoint_height, _)) => *checkpoint_height < fork_height,
        }
    }
}
