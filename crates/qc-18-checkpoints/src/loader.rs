//! # Source Loader
//!
//! Three ingestion stages, always run in this order against the current
//! store contents:
//!
//! ```text
//! compiled defaults ──→ override file ──→ DNS TXT records
//!   (unconditional)      (if present)       (if enabled)
//! ```
//!
//! Every stage feeds `CheckpointStore::insert`; an anchor accepted by an
//! earlier stage is never overwritten by a later one.
//!
//! | Stage    | Malformed input           | Conflict     | Source missing |
//! |----------|---------------------------|--------------|----------------|
//! | defaults | error                     | error        | n/a            |
//! | file     | whole file: error         | abort, error | no-op          |
//! | dns      | skip that record          | abort, error | no-op          |

use crate::adapters::{read_hashfile, HashFile};
use crate::domain::{default_checkpoints, dns_names, parse_hash_hex, CheckpointStore, Network};
use crate::error::CheckpointResult;
use crate::ports::outbound::TxtRecordResolver;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Which stage produced a [`LoadReport`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    Defaults,
    File,
    Dns,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadSource::Defaults => f.write_str("defaults"),
            LoadSource::File => f.write_str("file"),
            LoadSource::Dns => f.write_str("dns"),
        }
    }
}

/// Per-stage counters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Records that went through the insertion gate successfully
    pub accepted: usize,
    /// File records at or below the watermark
    pub skipped_stale: usize,
    /// DNS records that could not be parsed
    pub skipped_malformed: usize,
}

impl LoadReport {
    pub fn empty(source: LoadSource) -> Self {
        Self {
            source,
            accepted: 0,
            skipped_stale: 0,
            skipped_malformed: 0,
        }
    }
}

/// Result of a `load` call across the file and DNS stages
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub file: Option<LoadReport>,
    pub dns: Option<LoadReport>,
    /// Watermark after the load
    pub max_height: u64,
}

/// Stage 1: compiled defaults for `network`.
pub fn load_compiled_defaults(
    store: &mut CheckpointStore,
    network: Network,
) -> CheckpointResult<LoadReport> {
    let mut report = LoadReport::empty(LoadSource::Defaults);
    for (height, hash, difficulty) in default_checkpoints(network) {
        store.add_checkpoint(*height, hash, *difficulty)?;
        report.accepted += 1;
    }

    info!(
        "[qc-18] Loaded {} compiled checkpoints for {} (max height {})",
        report.accepted,
        network,
        store.max_checkpointed_height()
    );
    Ok(report)
}

/// Stage 2: override file at `path`. A missing file is a no-op.
///
/// For a store the caller owns outright. `CheckpointService` reads the file
/// before taking its write lock and only calls [`apply_hashfile`] under it.
pub fn load_from_file(store: &mut CheckpointStore, path: &Path) -> CheckpointResult<LoadReport> {
    match read_hashfile(path)? {
        Some(hashfile) => apply_hashfile(store, &hashfile),
        None => Ok(LoadReport::empty(LoadSource::File)),
    }
}

/// Insert the records of an already parsed override file.
///
/// Records at or below the watermark taken before the first record are
/// skipped as stale.
pub fn apply_hashfile(store: &mut CheckpointStore, hashfile: &HashFile) -> CheckpointResult<LoadReport> {
    let prev_max_height = store.max_checkpointed_height();
    debug!("[qc-18] Hard-coded max checkpoint height is {}", prev_max_height);

    let mut report = LoadReport::empty(LoadSource::File);
    for line in &hashfile.hashlines {
        if line.height <= prev_max_height {
            debug!("[qc-18] Ignoring checkpoint height {}", line.height);
            report.skipped_stale += 1;
            continue;
        }

        debug!(
            "[qc-18] Adding checkpoint height {}, hash={}",
            line.height, line.hash
        );
        store.add_checkpoint(line.height, &line.hash, line.difficulty.as_deref())?;
        report.accepted += 1;
    }

    info!(
        "[qc-18] Checkpoints file: {} added, {} stale",
        report.accepted, report.skipped_stale
    );
    Ok(report)
}

/// Resolve the TXT records published for `network`.
///
/// Resolver errors, an empty answer and a timeout all come back as an
/// empty list. A network without DNS names never reaches the resolver.
pub async fn fetch_dns_records<R>(resolver: &R, network: Network, timeout: Duration) -> Vec<String>
where
    R: TxtRecordResolver + ?Sized,
{
    let names = dns_names(network);
    if names.is_empty() {
        debug!("[qc-18] No DNS checkpoint names for {}", network);
        return Vec::new();
    }
    match tokio::time::timeout(timeout, resolver.resolve_txt(names)).await {
        Ok(Ok(records)) => {
            if records.is_empty() {
                warn!("[qc-18] No DNS checkpoint records resolved for {}", network);
            }
            records
        }
        Ok(Err(e)) => {
            warn!("[qc-18] DNS checkpoints unavailable for {}: {}", network, e);
            Vec::new()
        }
        Err(_) => {
            warn!(
                "[qc-18] DNS checkpoint lookup for {} timed out after {:?}",
                network, timeout
            );
            Vec::new()
        }
    }
}

/// Parse a `<height>:<hex hash>` TXT record.
///
/// Returns `None` for anything malformed.
pub fn parse_dns_record(record: &str) -> Option<(u64, &str)> {
    let (height, hash) = record.split_once(':')?;
    let height = height.trim().parse::<u64>().ok()?;
    parse_hash_hex(hash).ok()?;
    Some((height, hash))
}

/// Insert already resolved TXT records. Malformed records are skipped one
/// by one; a conflict aborts the stage.
pub fn apply_dns_records(
    store: &mut CheckpointStore,
    records: &[String],
) -> CheckpointResult<LoadReport> {
    let mut report = LoadReport::empty(LoadSource::Dns);
    for record in records {
        let Some((height, hash)) = parse_dns_record(record) else {
            debug!("[qc-18] Skipping malformed DNS checkpoint record {:?}", record);
            report.skipped_malformed += 1;
            continue;
        };
        store.add_checkpoint(height, hash, None)?;
        report.accepted += 1;
    }

    info!(
        "[qc-18] DNS checkpoints: {} added, {} malformed",
        report.accepted, report.skipped_malformed
    );
    Ok(report)
}

/// Stage 3: resolve and apply DNS attestations for `network`.
///
/// Holds `store` across the lookup, so it is meant for a store the caller
/// owns outright. `CheckpointService` resolves with [`fetch_dns_records`]
/// first and locks only for [`apply_dns_records`].
pub async fn load_from_dns<R>(
    store: &mut CheckpointStore,
    resolver: &R,
    network: Network,
    timeout: Duration,
) -> CheckpointResult<LoadReport>
where
    R: TxtRecordResolver + ?Sized,
{
    let records = fetch_dns_records(resolver, network, timeout).await;
    apply_dns_records(store, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HashLine, NoTxtResolver, StaticTxtResolver};
    use crate::error::CheckpointError;
    use async_trait::async_trait;

    fn hex_hash(n: u8) -> String {
        hex::encode([n; 32])
    }

    fn line(height: u64, n: u8) -> HashLine {
        HashLine {
            height,
            hash: hex_hash(n),
            difficulty: None,
        }
    }

    struct SlowResolver;

    #[async_trait]
    impl TxtRecordResolver for SlowResolver {
        async fn resolve_txt(&self, _names: &[&str]) -> CheckpointResult<Vec<String>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![format!("9:{}", hex_hash(9))])
        }
    }

    #[test]
    fn test_load_mainnet_defaults() {
        let mut store = CheckpointStore::new();
        let report = load_compiled_defaults(&mut store, Network::Mainnet).unwrap();

        assert_eq!(report.accepted, store.len());
        assert_eq!(store.max_checkpointed_height(), 478_865);
    }

    #[test]
    fn test_load_testnet_defaults_is_empty() {
        let mut store = CheckpointStore::new();
        let report = load_compiled_defaults(&mut store, Network::Testnet).unwrap();
        assert_eq!(report.accepted, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_hashfile_skips_stale() {
        let mut store = CheckpointStore::new();
        store.add_checkpoint(100, &hex_hash(1), None).unwrap();

        let hashfile = HashFile {
            hashlines: vec![line(50, 2), line(100, 3), line(150, 4)],
        };
        let report = apply_hashfile(&mut store, &hashfile).unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.skipped_stale, 2);
        assert_eq!(store.query_at(50), None);
        assert_eq!(store.query_at(100), Some([1; 32]));
        assert_eq!(store.query_at(150), Some([4; 32]));
    }

    #[test]
    fn test_apply_hashfile_watermark_fixed_before_stage() {
        let mut store = CheckpointStore::new();
        store.add_checkpoint(10, &hex_hash(1), None).unwrap();

        // 30 raises the watermark, 20 is still above the starting one
        let hashfile = HashFile {
            hashlines: vec![line(30, 3), line(20, 2)],
        };
        let report = apply_hashfile(&mut store, &hashfile).unwrap();

        assert_eq!(report.accepted, 2);
        assert_eq!(store.query_at(20), Some([2; 32]));
    }

    #[test]
    fn test_apply_hashfile_conflict_aborts() {
        let mut store = CheckpointStore::new();
        let hashfile = HashFile {
            hashlines: vec![line(10, 1), line(20, 2), line(20, 3), line(30, 4)],
        };

        let result = apply_hashfile(&mut store, &hashfile);
        assert!(matches!(
            result,
            Err(CheckpointError::HashConflict { height: 20, .. })
        ));
        assert_eq!(store.query_at(20), Some([2; 32]));
        assert_eq!(store.query_at(30), None);
    }

    #[test]
    fn test_apply_hashfile_bad_hash() {
        let mut store = CheckpointStore::new();
        let hashfile = HashFile {
            hashlines: vec![HashLine {
                height: 10,
                hash: "nothex".to_string(),
                difficulty: None,
            }],
        };
        let result = apply_hashfile(&mut store, &hashfile);
        assert!(matches!(result, Err(CheckpointError::HashDecode { .. })));
    }

    #[test]
    fn test_load_from_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CheckpointStore::new();

        let report = load_from_file(&mut store, &dir.path().join("none.json")).unwrap();
        assert_eq!(report, LoadReport::empty(LoadSource::File));
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_dns_record() {
        let hash = hex_hash(7);
        assert_eq!(
            parse_dns_record(&format!("1234:{hash}")),
            Some((1234, hash.as_str()))
        );
        assert_eq!(parse_dns_record(&hash), None);
        assert_eq!(parse_dns_record(&format!("abc:{hash}")), None);
        assert_eq!(parse_dns_record("1234:deadbeef"), None);
        assert_eq!(parse_dns_record(&format!("-5:{hash}")), None);
        assert_eq!(parse_dns_record(&format!("10: {hash}")), None);
        assert_eq!(parse_dns_record(&format!("10:{hash} ")), None);
    }

    #[test]
    fn test_apply_dns_records_skips_malformed() {
        let mut store = CheckpointStore::new();
        let records = vec![
            format!("10:{}", hex_hash(1)),
            "garbage".to_string(),
            format!("x:{}", hex_hash(2)),
            "20:zz".to_string(),
            format!("30:{}", hex_hash(3)),
        ];

        let report = apply_dns_records(&mut store, &records).unwrap();
        assert_eq!(report.accepted, 2);
        assert_eq!(report.skipped_malformed, 3);
        assert_eq!(store.max_checkpointed_height(), 30);
    }

    #[test]
    fn test_apply_dns_records_conflict() {
        let mut store = CheckpointStore::new();
        store.add_checkpoint(10, &hex_hash(1), None).unwrap();

        let records = vec![format!("10:{}", hex_hash(2))];
        let result = apply_dns_records(&mut store, &records);
        assert!(result.unwrap_err().is_conflict());
        assert_eq!(store.query_at(10), Some([1; 32]));
    }

    #[tokio::test]
    async fn test_load_from_dns_with_static_records() {
        let resolver = StaticTxtResolver::new();
        resolver.add_record("stagenetpoints1.quantum-chain.network", format!("5:{}", hex_hash(5)));
        resolver.add_record("testpoints1.quantum-chain.network", format!("6:{}", hex_hash(6)));

        let mut store = CheckpointStore::new();
        let report = load_from_dns(&mut store, &resolver, Network::Stagenet, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(store.query_at(5), Some([5; 32]));
        assert_eq!(store.query_at(6), None);
    }

    #[tokio::test]
    async fn test_load_from_dns_unavailable_is_noop() {
        let mut store = CheckpointStore::new();
        let report = load_from_dns(&mut store, &NoTxtResolver, Network::Stagenet, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(report.accepted, 0);
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_from_dns_timeout_is_noop() {
        let mut store = CheckpointStore::new();
        let report = load_from_dns(&mut store, &SlowResolver, Network::Stagenet, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(report.accepted, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_networks_without_dns_names_skip_resolver() {
        let resolver = StaticTxtResolver::with_records([format!("7:{}", hex_hash(7))]);

        for network in [Network::Mainnet, Network::Testnet] {
            let mut store = CheckpointStore::new();
            let report = load_from_dns(&mut store, &resolver, network, Duration::from_secs(1))
                .await
                .unwrap();

            assert_eq!(report, LoadReport::empty(LoadSource::Dns));
            assert!(store.is_empty());
        }
    }
}
