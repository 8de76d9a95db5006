//! # qc-18-checkpoints
//!
//! Trusted checkpoints: a sparse overlay pinning block heights to block
//! hashes (and optionally cumulative difficulties).
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Verification**: three-way check of a block hash against its height's anchor
//! - **Checkpoint Zone**: everything at or below the highest anchor is pinned
//! - **Reorg Gate**: alternative branches may only fork after the last passed anchor
//! - **Tiered Loading**: compiled defaults, override file, DNS TXT attestations
//!
//! ## Architecture
//!
//! ```text
//! compiled defaults ─┐
//! override file ─────┼──→ CheckpointStore::insert ──→ CheckpointStore
//! DNS TXT records ───┘      (first writer wins)            │
//!                                                          ↓
//! Consensus (8) ──verify / in_checkpoint_zone / alternative_branch_allowed
//! ```
//!
//! ## Loading Rules
//!
//! | Stage | Missing source | Malformed input | Conflict |
//! |-------|----------------|-----------------|----------|
//! | Defaults | n/a | startup-fatal | startup-fatal |
//! | File | no-op | load error | load error |
//! | DNS | no-op | record skipped | load error |
//!
//! ## Example
//!
//! ```rust,ignore
//! use qc_18_checkpoints::{CheckpointApi, CheckpointConfig, CheckpointService, NoTxtResolver};
//!
//! let service = CheckpointService::init(CheckpointConfig::from_env(), Arc::new(NoTxtResolver))?;
//! service.load_configured().await?;
//!
//! if !service.verify(height, &block_hash).is_acceptable() {
//!     // reject the block
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod ports;
pub mod service;

pub use adapters::{read_hashfile, HashFile, HashLine, NoTxtResolver, StaticTxtResolver};
pub use config::CheckpointConfig;
pub use domain::{
    default_checkpoints, dns_names, parse_difficulty, parse_hash_hex, CheckpointStore,
    CheckpointVerdict, Difficulty, Hash, Network,
};
pub use error::{CheckpointError, CheckpointResult};
pub use loader::{
    apply_dns_records, apply_hashfile, fetch_dns_records, load_compiled_defaults, load_from_dns,
    load_from_file, parse_dns_record, LoadReport, LoadSource, LoadSummary,
};
pub use ports::{CheckpointApi, TxtRecordResolver};
pub use service::CheckpointService;
