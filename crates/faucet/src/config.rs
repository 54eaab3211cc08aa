//! Faucet configuration

use crate::error::{FaucetError, FaucetResult};
use crate::network::Network;
use faucet_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Faucet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaucetConfig {
    /// Network selected when a session starts
    #[serde(default)]
    pub network: Network,

    /// HTTP timeout for cluster requests; none by default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            request_timeout_secs: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl FaucetConfig {
    /// Load from a config file (format chosen by extension)
    pub fn from_file<P: AsRef<Path>>(path: P) -> FaucetResult<Self> {
        faucet_common::load_config(path).map_err(|e| FaucetError::Config(format!("{:#}", e)))
    }

    /// Apply `FAUCET_*` environment overrides
    pub fn apply_env(&mut self) -> FaucetResult<()> {
        if let Ok(network) = std::env::var("FAUCET_NETWORK") {
            self.network = network.parse()?;
        }

        if let Ok(timeout) = std::env::var("FAUCET_REQUEST_TIMEOUT") {
            let secs = timeout.parse().map_err(|_| {
                FaucetError::Config(format!("FAUCET_REQUEST_TIMEOUT is not a number: {}", timeout))
            })?;
            self.request_timeout_secs = Some(secs);
        }

        if let Ok(level) = std::env::var("FAUCET_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Get request timeout duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FaucetConfig::default();
        assert_eq!(config.network, Network::DevNet);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json() {
        let config: FaucetConfig =
            serde_json::from_str(r#"{"network":"testnet","request_timeout_secs":15}"#).unwrap();
        assert_eq!(config.network, Network::TestNet);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.logging.format, "compact");
    }
}
