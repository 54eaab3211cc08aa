//! The only tests that touch `FAUCET_*` variables. They live in their own test
//! binary because the environment is process-wide, and they run inside one
//! test so nothing in this binary reads it concurrently.

use sol_faucet::{FaucetConfig, FaucetError, Network};

#[test]
fn test_env_overrides() {
    std::env::set_var("FAUCET_NETWORK", "testnet");
    std::env::set_var("FAUCET_REQUEST_TIMEOUT", "7");
    std::env::set_var("FAUCET_LOG_LEVEL", "warn");

    let mut config = FaucetConfig::default();
    config.apply_env().unwrap();
    assert_eq!(config.network, Network::TestNet);
    assert_eq!(config.request_timeout_secs, Some(7));
    assert_eq!(config.logging.level, "warn");

    std::env::set_var("FAUCET_REQUEST_TIMEOUT", "soon");
    assert!(matches!(config.apply_env(), Err(FaucetError::Config(_))));

    std::env::set_var("FAUCET_REQUEST_TIMEOUT", "7");
    std::env::set_var("FAUCET_NETWORK", "mainnet");
    assert!(matches!(config.apply_env(), Err(FaucetError::Config(_))));

    std::env::remove_var("FAUCET_NETWORK");
    std::env::remove_var("FAUCET_REQUEST_TIMEOUT");
    std::env::remove_var("FAUCET_LOG_LEVEL");
}
