//! Error types for the faucet

use thiserror::Error;

/// Faucet errors
#[derive(Error, Debug)]
pub enum FaucetError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type FaucetResult<T> = Result<T, FaucetError>;
