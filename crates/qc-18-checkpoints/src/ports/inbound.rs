//! Driving Ports (API - Inbound)

use crate::domain::{CheckpointVerdict, Hash, Network};
use crate::error::CheckpointResult;
use crate::loader::LoadSummary;
use async_trait::async_trait;
use std::path::Path;

/// Checkpoints API used by the consensus engine.
///
/// Queries are synchronous and cheap. `load` may touch the filesystem and
/// the network.
#[async_trait]
pub trait CheckpointApi: Send + Sync {
    /// Check a block hash against the checkpoint at `height`.
    ///
    /// Only [`CheckpointVerdict::Mismatch`] should reject the block.
    fn verify(&self, height: u64, hash: &Hash) -> CheckpointVerdict;

    /// Is `height` at or below the highest checkpoint?
    fn in_checkpoint_zone(&self, height: u64) -> bool;

    /// May an alternative branch fork at `fork_height` with the local chain
    /// at `chain_height`?
    fn alternative_branch_allowed(&self, chain_height: u64, fork_height: u64) -> bool;

    /// Highest checkpointed height (0 when empty)
    fn max_checkpointed_height(&self) -> u64;

    /// Hash pinned at exactly `height`
    fn checkpoint_at(&self, height: u64) -> Option<Hash>;

    /// Load the override file (if any) and, when `use_dns` is set, DNS
    /// attestations for `network`.
    ///
    /// Succeeds only if every stage that ran succeeded.
    async fn load(
        &self,
        file_path: Option<&Path>,
        network: Network,
        use_dns: bool,
    ) -> CheckpointResult<LoadSummary>;
}
