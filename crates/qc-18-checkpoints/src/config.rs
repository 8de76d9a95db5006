//! # Checkpoint Configuration
//!
//! Node-level settings for loading checkpoints, with environment overrides:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `QC_NETWORK` | `network` |
//! | `QC_CHECKPOINT_FILE` | `checkpoint_file` |
//! | `QC_CHECKPOINT_DNS` | `enable_dns` |
//! | `QC_CHECKPOINT_DNS_TIMEOUT_SECS` | `dns_timeout_secs` |

use crate::domain::Network;
use crate::error::{CheckpointError, CheckpointResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Checkpoint loading configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointConfig {
    /// Network selecting compiled defaults and DNS names.
    pub network: Network,
    /// Optional JSON override file.
    pub checkpoint_file: Option<PathBuf>,
    /// Query DNS TXT records for extra checkpoints.
    pub enable_dns: bool,
    /// Upper bound on a DNS lookup, in seconds.
    pub dns_timeout_secs: u64,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            checkpoint_file: None,
            enable_dns: false,
            dns_timeout_secs: 20,
        }
    }
}

impl CheckpointConfig {
    /// Create a config for testing (stagenet, short timeout).
    pub fn for_testing() -> Self {
        Self {
            network: Network::Stagenet,
            checkpoint_file: None,
            enable_dns: false,
            dns_timeout_secs: 1,
        }
    }

    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from `lookup`. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup("QC_NETWORK") {
            match network.parse() {
                Ok(n) => self.network = n,
                Err(e) => warn!("[qc-18] QC_NETWORK ignored: {}", e),
            }
        }

        if let Some(path) = lookup("QC_CHECKPOINT_FILE") {
            if path.is_empty() {
                self.checkpoint_file = None;
            } else {
                info!("[qc-18] Using checkpoints file {}", path);
                self.checkpoint_file = Some(PathBuf::from(path));
            }
        }

        if let Some(dns) = lookup("QC_CHECKPOINT_DNS") {
            match dns.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.enable_dns = true,
                "0" | "false" | "no" | "off" => self.enable_dns = false,
                other => warn!("[qc-18] QC_CHECKPOINT_DNS ignored: {:?}", other),
            }
        }

        if let Some(secs) = lookup("QC_CHECKPOINT_DNS_TIMEOUT_SECS") {
            match secs.trim().parse() {
                Ok(s) => self.dns_timeout_secs = s,
                Err(_) => warn!("[qc-18] QC_CHECKPOINT_DNS_TIMEOUT_SECS ignored: {:?}", secs),
            }
        }
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> CheckpointResult<()> {
        if self.enable_dns && self.dns_timeout_secs == 0 {
            return Err(CheckpointError::InvalidConfig {
                reason: "dns_timeout_secs must be positive when DNS checkpoints are enabled"
                    .to_string(),
            });
        }
        Ok(())
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = CheckpointConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert!(config.checkpoint_file.is_none());
        assert!(!config.enable_dns);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("QC_NETWORK", "testnet"),
            ("QC_CHECKPOINT_FILE", "/var/lib/qc/checkpoints.json"),
            ("QC_CHECKPOINT_DNS", "true"),
            ("QC_CHECKPOINT_DNS_TIMEOUT_SECS", "5"),
        ]);
        let mut config = CheckpointConfig::default();
        config.apply_env_overrides(|k| vars.get(k).cloned());

        assert_eq!(config.network, Network::Testnet);
        assert_eq!(
            config.checkpoint_file,
            Some(PathBuf::from("/var/lib/qc/checkpoints.json"))
        );
        assert!(config.enable_dns);
        assert_eq!(config.dns_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let vars = env(&[
            ("QC_NETWORK", "moonnet"),
            ("QC_CHECKPOINT_DNS", "maybe"),
            ("QC_CHECKPOINT_DNS_TIMEOUT_SECS", "soon"),
        ]);
        let mut config = CheckpointConfig::default();
        config.apply_env_overrides(|k| vars.get(k).cloned());

        assert_eq!(config, CheckpointConfig::default());
    }

    #[test]
    fn test_zero_timeout_with_dns_is_invalid() {
        let config = CheckpointConfig {
            enable_dns: true,
            dns_timeout_secs: 0,
            ..CheckpointConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CheckpointError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: CheckpointConfig = serde_json::from_str(
            r#"{"network":"stagenet","checkpoint_file":null,"enable_dns":true,"dns_timeout_secs":3}"#,
        )
        .unwrap();
        assert_eq!(config.network, Network::Stagenet);
        assert!(config.enable_dns);
    }
}
