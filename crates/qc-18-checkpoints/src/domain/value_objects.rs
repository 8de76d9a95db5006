//! # Value Objects
//!
//! Hash and difficulty encodings plus the network selector.

use crate::error::{CheckpointError, CheckpointResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Block hash (32 bytes)
pub type Hash = [u8; 32];

/// Cumulative difficulty anchor
pub type Difficulty = primitive_types::U256;

/// Decode a 64-character hex string into a block hash. Surrounding
/// whitespace is not tolerated.
pub fn parse_hash_hex(input: &str) -> CheckpointResult<Hash> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(input, &mut hash).map_err(|e| CheckpointError::HashDecode {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    Ok(hash)
}

/// Decode a decimal difficulty string.
pub fn parse_difficulty(input: &str) -> CheckpointResult<Difficulty> {
    Difficulty::from_dec_str(input.trim()).map_err(|_| CheckpointError::DifficultyDecode {
        input: input.to_string(),
    })
}

/// Network the node runs on; selects compiled defaults and DNS names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Stagenet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Stagenet => "stagenet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "stagenet" | "stage" => Ok(Network::Stagenet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash_hex() {
        let hash = parse_hash_hex(&"0f".repeat(32)).unwrap();
        assert_eq!(hash, [0x0f; 32]);
    }

    #[test]
    fn test_parse_hash_hex_rejects_short_input() {
        let result = parse_hash_hex("abcd");
        assert!(matches!(result, Err(CheckpointError::HashDecode { .. })));
    }

    #[test]
    fn test_parse_hash_hex_rejects_padding() {
        let hash = "0f".repeat(32);
        for padded in [format!(" {hash}"), format!("{hash}\n"), format!("{hash} ")] {
            let result = parse_hash_hex(&padded);
            assert!(matches!(result, Err(CheckpointError::HashDecode { .. })));
        }
    }

    #[test]
    fn test_parse_hash_hex_rejects_non_hex() {
        let result = parse_hash_hex(&"zz".repeat(32));
        assert!(matches!(result, Err(CheckpointError::HashDecode { .. })));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            parse_difficulty("340282366920938463463374607431768211456").unwrap(),
            Difficulty::from(u128::MAX) + Difficulty::one()
        );
        assert!(matches!(
            parse_difficulty("12x"),
            Err(CheckpointError::DifficultyDecode { .. })
        ));
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("stagenet".parse::<Network>().unwrap(), Network::Stagenet);
        assert!("regtest".parse::<Network>().is_err());
    }

    #[test]
    fn test_network_serde_lowercase() {
        let json = serde_json::to_string(&Network::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
    }
}
