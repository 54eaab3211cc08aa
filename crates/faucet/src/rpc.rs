//! JSON-RPC client for cluster airdrops

use crate::address::Pubkey;
use crate::error::{FaucetError, FaucetResult};
use crate::network::Network;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Fixed amount credited per request (1 SOL)
pub const AIRDROP_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Something that can ask a cluster to credit an address.
///
/// Returns the transaction signature reported by the cluster.
#[async_trait]
pub trait AirdropClient: Send + Sync {
    async fn request_airdrop(
        &self,
        network: Network,
        recipient: &Pubkey,
        lamports: u64,
    ) -> FaucetResult<String>;
}

/// RPC client talking to the public cluster endpoints
pub struct RpcAirdropClient {
    client: reqwest::Client,
    endpoints: HashMap<Network, String>,
}

impl RpcAirdropClient {
    /// Client for the fixed public endpoints, with no transport timeout.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Client for the fixed public endpoints with a transport timeout.
    pub fn with_timeout(timeout: Duration) -> FaucetResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FaucetError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self::with_client(client))
    }

    fn with_client(client: reqwest::Client) -> Self {
        let endpoints = Network::ALL
            .iter()
            .map(|n| (*n, n.endpoint().to_string()))
            .collect();
        Self { client, endpoints }
    }

    /// Points the clusters at other URLs, e.g. a local test validator.
    pub fn with_endpoints(testnet_url: impl Into<String>, devnet_url: impl Into<String>) -> Self {
        let mut endpoints = HashMap::new();
        endpoints.insert(Network::TestNet, testnet_url.into());
        endpoints.insert(Network::DevNet, devnet_url.into());
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Endpoint used for `network`
    pub fn endpoint(&self, network: Network) -> &str {
        self.endpoints
            .get(&network)
            .map(String::as_str)
            .unwrap_or_else(|| network.endpoint())
    }

    async fn call(
        &self,
        network: Network,
        method: &str,
        params: serde_json::Value,
    ) -> FaucetResult<serde_json::Value> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let url = self.endpoint(network);
        debug!("{} -> {} ({})", method, network, url);

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FaucetError::RpcError(format!("Request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| FaucetError::RpcError(format!("HTTP status: {}", e)))?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FaucetError::RpcError(format!("Invalid response: {}", e)))?;

        if let Some(error) = json.get("error") {
            return Err(FaucetError::RpcError(error.to_string()));
        }

        json.get("result")
            .cloned()
            .ok_or_else(|| FaucetError::RpcError("Response has no result".to_string()))
    }
}

impl Default for RpcAirdropClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirdropClient for RpcAirdropClient {
    async fn request_airdrop(
        &self,
        network: Network,
        recipient: &Pubkey,
        lamports: u64,
    ) -> FaucetResult<String> {
        let result = self
            .call(
                network,
                "requestAirdrop",
                serde_json::json!([recipient.to_string(), lamports]),
            )
            .await?;

        let signature = result
            .as_str()
            .ok_or_else(|| FaucetError::RpcError(format!("Unexpected airdrop result: {}", result)))?
            .to_string();

        info!("Airdrop of {} lamports to {} on {}: {}", lamports, recipient, network, signature);
        Ok(signature)
    }
}
