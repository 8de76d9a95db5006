//! QC-Checkpoints: load and query the trusted checkpoint set
//!
//! Runs the same startup sequence as the node (compiled defaults, override
//! file, DNS records) and answers one-off queries against the result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qc_18_checkpoints::{
    parse_hash_hex, CheckpointApi, CheckpointConfig, CheckpointService, CheckpointVerdict,
    Network, StaticTxtResolver,
};

/// QC-Checkpoints: inspect the trusted checkpoint set
#[derive(Parser, Debug)]
#[command(name = "qc-checkpoints")]
#[command(about = "Load checkpoints and verify blocks or fork heights against them")]
struct Args {
    /// Network (mainnet, testnet, stagenet); defaults to QC_NETWORK or mainnet
    #[arg(short, long)]
    network: Option<Network>,

    /// JSON override file with {"hashlines": [{"height", "hash"}]}
    #[arg(short = 'f', long)]
    checkpoint_file: Option<PathBuf>,

    /// Pre-fetched DNS TXT record (`height:hash`), repeatable. Enables the DNS
    /// stage against these records only; no live lookups are made, and
    /// networks without DNS names ignore them
    #[arg(long = "txt-record")]
    txt_records: Vec<String>,

    /// Verify a block, as HEIGHT:HASH
    #[arg(long)]
    verify: Option<String>,

    /// Evaluate the reorg gate, as CHAIN_HEIGHT:FORK_HEIGHT
    #[arg(long)]
    fork: Option<String>,
}

fn parse_pair(input: &str) -> Result<(&str, &str)> {
    input
        .split_once(':')
        .with_context(|| format!("expected two values separated by ':', got {input:?}"))
}

fn load_config(args: &Args) -> CheckpointConfig {
    let mut config = CheckpointConfig::from_env();
    if let Some(network) = args.network {
        config.network = network;
    }
    if let Some(path) = &args.checkpoint_file {
        config.checkpoint_file = Some(path.clone());
    }
    if !args.txt_records.is_empty() {
        config.enable_dns = true;
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = load_config(&args);
    let resolver = Arc::new(StaticTxtResolver::with_records(args.txt_records.clone()));

    let service = CheckpointService::init(config, resolver)
        .context("failed to load compiled checkpoints")?;
    let summary = service
        .load_configured()
        .await
        .context("failed to load checkpoints")?;

    info!(
        "{} checkpoints on {}, max height {}",
        service.snapshot().len(),
        service.config().network,
        summary.max_height
    );

    if let Some(spec) = &args.verify {
        let (height, hash) = parse_pair(spec)?;
        let height: u64 = height.parse().context("invalid height")?;
        let hash = parse_hash_hex(hash)?;

        match service.verify(height, &hash) {
            CheckpointVerdict::NotACheckpoint => println!("height {height}: not a checkpoint"),
            CheckpointVerdict::Match => println!("height {height}: checkpoint matches"),
            CheckpointVerdict::Mismatch { expected } => {
                bail!(
                    "height {height}: checkpoint mismatch, expected {}",
                    hex::encode(expected)
                );
            }
        }
    }

    if let Some(spec) = &args.fork {
        let (chain, fork) = parse_pair(spec)?;
        let chain: u64 = chain.parse().context("invalid chain height")?;
        let fork: u64 = fork.parse().context("invalid fork height")?;

        if service.alternative_branch_allowed(chain, fork) {
            println!("fork at {fork} with chain at {chain}: allowed");
        } else {
            warn!("alternative branch rejected by checkpoints");
            println!("fork at {fork} with chain at {chain}: rejected");
        }
    }

    Ok(())
}
