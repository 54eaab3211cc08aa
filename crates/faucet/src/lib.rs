//! Solana test-cluster faucet
//!
//! Requests a 1 SOL airdrop for a wallet address on DevNet or TestNet:
//! - Address validation (base58, 32 bytes, on the ed25519 curve)
//! - A session controller that allows one outstanding request at a time
//! - JSON-RPC `requestAirdrop` against the public cluster endpoints
//! - Plain-text rendering of the session for terminals

pub mod address;
pub mod config;
pub mod controller;
pub mod error;
pub mod network;
pub mod rpc;
pub mod view;

pub use address::{is_valid_address, valid_recipient, Pubkey};
pub use config::FaucetConfig;
pub use controller::{
    ControllerHandle, Event, FaucetController, Outcome, Phase, SessionState, Submission,
    FAILURE_MESSAGE, INVALID_ADDRESS_MESSAGE,
};
pub use error::{FaucetError, FaucetResult};
pub use network::Network;
pub use rpc::{AirdropClient, RpcAirdropClient, AIRDROP_LAMPORTS, LAMPORTS_PER_SOL};
