//! Domain module for Checkpoints subsystem
//!
//! ## Core Modules
//! - value_objects: Hash / difficulty codecs, network selector
//! - store: Height anchors with first-writer-wins insertion
//! - boundary: Zone, verification and reorg-gate queries
//! - defaults: Compiled mainnet anchors and DNS names

pub mod boundary;
pub mod defaults;
pub mod store;
pub mod value_objects;

pub use boundary::CheckpointVerdict;
pub use defaults::{default_checkpoints, dns_names, DefaultCheckpoint};
pub use store::CheckpointStore;
pub use value_objects::{parse_difficulty, parse_hash_hex, Difficulty, Hash, Network};
