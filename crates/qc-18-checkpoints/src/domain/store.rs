//! # Checkpoint Store
//!
//! Sparse, ordered height anchors. Every mutation goes through
//! [`CheckpointStore::insert`], which enforces first-writer-wins per field.

use super::value_objects::{parse_difficulty, parse_hash_hex, Difficulty, Hash};
use crate::error::{CheckpointError, CheckpointResult};
use std::collections::BTreeMap;
use tracing::warn;

/// Height-indexed hash and difficulty anchors.
///
/// INVARIANT: an accepted anchor is never overwritten with a different value
/// and never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointStore {
    points: BTreeMap<u64, Hash>,
    difficulty_points: BTreeMap<u64, Difficulty>,
}

impl CheckpointStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `hash` (and optionally `difficulty`) at `height`.
    ///
    /// A hash conflict leaves the store untouched. The difficulty is checked
    /// only after the hash is accepted, so a difficulty conflict still keeps
    /// the hash anchor.
    pub fn insert(
        &mut self,
        height: u64,
        hash: Hash,
        difficulty: Option<Difficulty>,
    ) -> CheckpointResult<()> {
        if let Some(existing) = self.points.get(&height) {
            if *existing != hash {
                warn!(
                    "[qc-18] Checkpoint at height {} already exists, and hash for new checkpoint was different",
                    height
                );
                return Err(CheckpointError::HashConflict {
                    height,
                    existing: *existing,
                    incoming: hash,
                });
            }
        }
        self.points.insert(height, hash);

        if let Some(difficulty) = difficulty {
            if let Some(existing) = self.difficulty_points.get(&height) {
                if *existing != difficulty {
                    warn!(
                        "[qc-18] Difficulty checkpoint at height {} already exists, and difficulty for new checkpoint was different",
                        height
                    );
                    return Err(CheckpointError::DifficultyConflict {
                        height,
                        existing: *existing,
                        incoming: difficulty,
                    });
                }
            }
            self.difficulty_points.insert(height, difficulty);
        }
        Ok(())
    }

    /// Decode string inputs and insert them.
    ///
    /// Both strings are decoded before the store is touched.
    pub fn add_checkpoint(
        &mut self,
        height: u64,
        hash_hex: &str,
        difficulty: Option<&str>,
    ) -> CheckpointResult<()> {
        let hash = parse_hash_hex(hash_hex)?;
        let difficulty = match difficulty {
            Some(s) if !s.trim().is_empty() => Some(parse_difficulty(s)?),
            _ => None,
        };
        self.insert(height, hash, difficulty)
    }

    /// Exact-match hash lookup
    pub fn query_at(&self, height: u64) -> Option<Hash> {
        self.points.get(&height).copied()
    }

    /// Exact-match difficulty lookup
    pub fn difficulty_at(&self, height: u64) -> Option<Difficulty> {
        self.difficulty_points.get(&height).copied()
    }

    /// Highest checkpointed height, or 0 for an empty store.
    pub fn max_checkpointed_height(&self) -> u64 {
        self.points
            .last_key_value()
            .map(|(height, _)| *height)
            .unwrap_or(0)
    }

    /// Merge every anchor of `other` into this store, lowest height first.
    ///
    /// Stops at the first conflict. Heights applied before it stay applied.
    pub fn merge(&mut self, other: &CheckpointStore) -> CheckpointResult<()> {
        for (height, hash) in &other.points {
            self.insert(*height, *hash, other.difficulty_at(*height))?;
        }
        Ok(())
    }

    /// Report the first height where `other` pins a different hash.
    pub fn check_for_conflicts(&self, other: &CheckpointStore) -> CheckpointResult<()> {
        for (height, hash) in &other.points {
            if let Some(existing) = self.points.get(height) {
                if existing != hash {
                    return Err(CheckpointError::HashConflict {
                        height: *height,
                        existing: *existing,
                        incoming: *hash,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn points(&self) -> &BTreeMap<u64, Hash> {
        &self.points
    }

    pub fn difficulty_points(&self) -> &BTreeMap<u64, Difficulty> {
        &self.difficulty_points
    }

    /// Number of hash anchors
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
