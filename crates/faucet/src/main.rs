//! Faucet binary

use clap::Parser;
use sol_faucet::{
    view, FaucetConfig, FaucetController, Network, Outcome, RpcAirdropClient, Submission,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Request 1 SOL on a Solana test cluster
#[derive(Parser, Debug)]
#[command(name = "sol-faucet", author, version, about, long_about = None)]
struct Args {
    /// Config file path (toml, yaml or json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cluster to request from (devnet or testnet)
    #[arg(short, long)]
    network: Option<Network>,

    /// HTTP timeout for the airdrop request (seconds)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Wallet address; starts an interactive session when omitted
    address: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FaucetConfig::from_file(path)?,
        None => FaucetConfig::default(),
    };
    config.apply_env()?;

    // Override with CLI arguments
    if let Some(network) = args.network {
        config.network = network;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = Some(timeout);
    }
    if args.debug {
        config.logging.level = "debug".to_string();
    }

    faucet_common::init_logging(&config.logging).map_err(|e| anyhow::anyhow!(e))?;
    debug!("Configuration: {:?}", config);

    let client = match config.request_timeout() {
        Some(timeout) => RpcAirdropClient::with_timeout(timeout)?,
        None => RpcAirdropClient::new(),
    };
    let controller = FaucetController::with_network(Arc::new(client), config.network);

    match args.address {
        Some(address) => airdrop_once(controller, &address).await,
        None => interactive(controller).await,
    }
}

/// One submission, wait for the result, print it.
async fn airdrop_once(mut controller: FaucetController, address: &str) -> anyhow::Result<ExitCode> {
    controller.edit_address(address);

    if let Submission::Dispatched { network } = controller.submit() {
        println!("Requesting 1 SOL on {}...", network);
    }
    let succeeded = matches!(
        controller.wait_for_outcome().await,
        Some(Outcome::Success { .. })
    );

    println!("{}", view::render(controller.state()));
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Line-driven session: network names switch clusters, `send` submits,
/// `quit` leaves, anything else is taken as the address.
async fn interactive(controller: FaucetController) -> anyhow::Result<ExitCode> {
    let handle = controller.handle();
    let mut updates = controller.subscribe();
    let session = tokio::spawn(controller.run());

    let renderer = tokio::spawn(async move {
        loop {
            let screen = view::render(&updates.borrow_and_update());
            println!("\n{}\n> devnet | testnet | send | quit | <address>", screen);
            if updates.changed().await.is_err() {
                break;
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let delivered = match line.trim() {
            "" => true,
            "quit" | "exit" => break,
            "send" => handle.submit(),
            "devnet" => handle.select_network(Network::DevNet),
            "testnet" => handle.select_network(Network::TestNet),
            _ => handle.edit_address(line.as_str()),
        };
        if !delivered {
            break;
        }
    }

    handle.close();
    let final_state = session.await?;
    renderer.await?;
    info!("Session ended on {}", final_state.selected_network);

    Ok(match final_state.last_outcome {
        Some(Outcome::Failure { .. }) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
