use sol_faucet::{FaucetConfig, Network};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_toml() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
network = "testnet"
request_timeout_secs = 20

[logging]
level = "debug"
format = "json"
"#
    )
    .unwrap();

    let config = FaucetConfig::from_file(file.path()).unwrap();
    assert_eq!(config.network, Network::TestNet);
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(20)));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();

    let config = FaucetConfig::from_file(file.path()).unwrap();
    assert_eq!(config.network, Network::DevNet);
    assert_eq!(config.request_timeout(), None);
}

#[test]
fn test_unknown_network_is_config_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "network = \"mainnet\"").unwrap();

    assert!(FaucetConfig::from_file(file.path()).is_err());
}
