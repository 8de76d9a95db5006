//! TXT Record Resolver Adapters
//!
//! Implements `TxtRecordResolver` without touching the network: a static
//! record table (tests, pre-fetched operator records) and a resolver for
//! nodes running with DNS checkpoints disabled.

use crate::error::{CheckpointError, CheckpointResult};
use crate::ports::outbound::TxtRecordResolver;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory TXT records keyed by DNS name.
#[derive(Default)]
pub struct StaticTxtResolver {
    records: RwLock<HashMap<String, Vec<String>>>,
    /// Records served for any name, in insertion order.
    wildcard: RwLock<Vec<String>>,
}

impl StaticTxtResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for every queried name.
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resolver = Self::new();
        resolver
            .wildcard
            .write()
            .extend(records.into_iter().map(Into::into));
        resolver
    }

    /// Add a record under a specific DNS name.
    pub fn add_record(&self, name: &str, record: impl Into<String>) {
        self.records
            .write()
            .entry(name.to_string())
            .or_default()
            .push(record.into());
    }
}

#[async_trait]
impl TxtRecordResolver for StaticTxtResolver {
    async fn resolve_txt(&self, names: &[&str]) -> CheckpointResult<Vec<String>> {
        let records = self.records.read();
        let mut resolved: Vec<String> = names
            .iter()
            .filter_map(|name| records.get(*name))
            .flatten()
            .cloned()
            .collect();
        resolved.extend(self.wildcard.read().iter().cloned());

        debug!(
            "[qc-18] Static resolver returned {} TXT records for {} names",
            resolved.len(),
            names.len()
        );
        Ok(resolved)
    }
}

/// Resolver for nodes with DNS checkpoints disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTxtResolver;

#[async_trait]
impl TxtRecordResolver for NoTxtResolver {
    async fn resolve_txt(&self, _names: &[&str]) -> CheckpointResult<Vec<String>> {
        Err(CheckpointError::DnsUnavailable {
            reason: "no DNS resolver configured".to_string(),
        })
    }
}
