//! Shared plumbing for the faucet workspace: logging setup and config-file loading.

pub mod utils;

pub use utils::config::load_config;
pub use utils::logging::{init_logging, init_test_logging, LogFormat, LoggingConfig};
