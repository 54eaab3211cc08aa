//! Target clusters and their fixed endpoints

use crate::error::FaucetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Test cluster that airdrop requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    TestNet,
    #[default]
    DevNet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::DevNet, Network::TestNet];

    /// JSON-RPC endpoint of the cluster
    pub fn endpoint(&self) -> &'static str {
        match self {
            Network::TestNet => "https://api.testnet.solana.com/",
            Network::DevNet => "https://api.devnet.solana.com/",
        }
    }

    /// Cluster identifier used by explorers (`?cluster=...`)
    pub fn cluster(&self) -> &'static str {
        match self {
            Network::TestNet => "testnet",
            Network::DevNet => "devnet",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Network::TestNet => "TestNet",
            Network::DevNet => "DevNet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Network {
    type Err = FaucetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "devnet" => Ok(Network::DevNet),
            "testnet" => Ok(Network::TestNet),
            other => Err(FaucetError::Config(format!(
                "unknown network '{}', expected devnet or testnet",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_devnet() {
        assert_eq!(Network::default(), Network::DevNet);
    }

    #[test]
    fn test_endpoints_are_distinct() {
        assert_ne!(Network::DevNet.endpoint(), Network::TestNet.endpoint());
        assert_eq!(Network::DevNet.cluster(), "devnet");
        assert_eq!(Network::TestNet.cluster(), "testnet");
    }

    #[test]
    fn test_parse() {
        assert_eq!("DevNet".parse::<Network>().unwrap(), Network::DevNet);
        assert_eq!(" testnet ".parse::<Network>().unwrap(), Network::TestNet);
        assert!("mainnet-beta".parse::<Network>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Network::TestNet).unwrap();
        assert_eq!(json, "\"testnet\"");
        let back: Network = serde_json::from_str("\"devnet\"").unwrap();
        assert_eq!(back, Network::DevNet);
    }
}
