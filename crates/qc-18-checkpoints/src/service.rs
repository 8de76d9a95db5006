//! Checkpoint Service - store ownership and load orchestration
//!
//! The store sits behind a single `RwLock`: loads take the write lock only
//! while inserting, queries take the read lock. DNS lookups run before the
//! write lock is taken, so block validation never waits on the network.

use crate::adapters::read_hashfile;
use crate::config::CheckpointConfig;
use crate::domain::{CheckpointStore, CheckpointVerdict, Hash, Network};
use crate::error::CheckpointResult;
use crate::loader::{
    apply_dns_records, apply_hashfile, fetch_dns_records, load_compiled_defaults, LoadReport,
    LoadSource, LoadSummary,
};
use crate::ports::inbound::CheckpointApi;
use crate::ports::outbound::TxtRecordResolver;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Checkpoints service handed to the consensus engine at startup.
pub struct CheckpointService<R>
where
    R: TxtRecordResolver,
{
    config: CheckpointConfig,
    store: Arc<RwLock<CheckpointStore>>,
    resolver: Arc<R>,
}

impl<R> CheckpointService<R>
where
    R: TxtRecordResolver,
{
    /// Create a service over an empty store.
    pub fn new(config: CheckpointConfig, resolver: Arc<R>) -> Self {
        Self {
            config,
            store: Arc::new(RwLock::new(CheckpointStore::new())),
            resolver,
        }
    }

    /// Create a service and load the compiled defaults for the configured
    /// network. An error here should abort node startup.
    pub fn init(config: CheckpointConfig, resolver: Arc<R>) -> CheckpointResult<Self> {
        config.validate()?;
        let service = Self::new(config, resolver);
        service.load_compiled_defaults()?;
        Ok(service)
    }

    pub fn config(&self) -> &CheckpointConfig {
        &self.config
    }

    /// Load the compiled defaults for the configured network.
    pub fn load_compiled_defaults(&self) -> CheckpointResult<LoadReport> {
        load_compiled_defaults(&mut self.store.write(), self.config.network)
    }

    /// Run the file and DNS stages as configured.
    pub async fn load_configured(&self) -> CheckpointResult<LoadSummary> {
        let file = self.config.checkpoint_file.clone();
        self.load(file.as_deref(), self.config.network, self.config.enable_dns)
            .await
    }

    /// Insert a single checkpoint from hex / decimal strings.
    pub fn add_checkpoint(
        &self,
        height: u64,
        hash_hex: &str,
        difficulty: Option<&str>,
    ) -> CheckpointResult<()> {
        self.store.write().add_checkpoint(height, hash_hex, difficulty)
    }

    /// Merge another store in; stops at the first conflicting height.
    pub fn merge(&self, other: &CheckpointStore) -> CheckpointResult<()> {
        self.store.write().merge(other)
    }

    /// Copy of the current store contents.
    pub fn snapshot(&self) -> CheckpointStore {
        self.store.read().clone()
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<RwLock<CheckpointStore>> {
        Arc::clone(&self.store)
    }

    fn load_file_stage(&self, path: &Path) -> CheckpointResult<LoadReport> {
        info!("[qc-18] Adding checkpoints from blockchain hashfile {}", path.display());
        match read_hashfile(path)? {
            Some(hashfile) => apply_hashfile(&mut self.store.write(), &hashfile),
            None => Ok(LoadReport::empty(LoadSource::File)),
        }
    }

    async fn load_dns_stage(&self, network: Network) -> CheckpointResult<LoadReport> {
        let records =
            fetch_dns_records(self.resolver.as_ref(), network, self.config.dns_timeout()).await;
        apply_dns_records(&mut self.store.write(), &records)
    }
}

#[async_trait]
impl<R> CheckpointApi for CheckpointService<R>
where
    R: TxtRecordResolver,
{
    fn verify(&self, height: u64, hash: &Hash) -> CheckpointVerdict {
        self.store.read().verify(height, hash)
    }

    fn in_checkpoint_zone(&self, height: u64) -> bool {
        self.store.read().in_checkpoint_zone(height)
    }

    fn alternative_branch_allowed(&self, chain_height: u64, fork_height: u64) -> bool {
        self.store
            .read()
            .alternative_branch_allowed(chain_height, fork_height)
    }

    fn max_checkpointed_height(&self) -> u64 {
        self.store.read().max_checkpointed_height()
    }

    fn checkpoint_at(&self, height: u64) -> Option<Hash> {
        self.store.read().query_at(height)
    }

    async fn load(
        &self,
        file_path: Option<&Path>,
        network: Network,
        use_dns: bool,
    ) -> CheckpointResult<LoadSummary> {
        // Both stages always run; the first failure is what gets reported.
        let file_result = file_path.map(|path| self.load_file_stage(path));
        let dns_result = if use_dns {
            Some(self.load_dns_stage(network).await)
        } else {
            None
        };

        let mut summary = LoadSummary::default();
        let mut first_error = None;
        for (slot, result) in [(&mut summary.file, file_result), (&mut summary.dns, dns_result)] {
            match result {
                Some(Ok(report)) => *slot = Some(report),
                Some(Err(e)) => {
                    error!("[qc-18] Checkpoint load stage failed: {}", e);
                    first_error.get_or_insert(e);
                }
                None => {}
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        summary.max_height = self.max_checkpointed_height();
        info!(
            "[qc-18] Checkpoints loaded for {}, max height {}",
            network, summary.max_height
        );
        Ok(summary)
    }
}
