//! Plain-text rendering of a faucet session

use crate::controller::{Outcome, SessionState};
use crate::network::Network;

/// Transaction explorer base
pub const EXPLORER_TX_URL: &str = "https://explorer.solana.com/tx";

/// Standing notice about cluster rate limits
pub const DAILY_LIMIT_NOTICE: &str = "Devnet and Testnet have a limit of 1 sol per day";

/// Link where a user can check an airdrop transaction
pub fn explorer_link(network: Network, transaction_ref: &str) -> String {
    format!(
        "{}/{}?cluster={}",
        EXPLORER_TX_URL,
        transaction_ref,
        network.cluster()
    )
}

/// Network selector line, the selected network in brackets
pub fn render_network_toggle(selected: Network) -> String {
    Network::ALL
        .iter()
        .map(|n| {
            if *n == selected {
                format!("[{}]", n.label())
            } else {
                format!(" {} ", n.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title and body for the last outcome
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success {
            transaction_ref,
            network,
        } => format!(
            "Success!\nTransaction of 1 sol successful! That may or may not be true \
             please check from this link.\n{}",
            explorer_link(*network, transaction_ref)
        ),
        Outcome::Failure { message } => format!("Error!\n{}", message),
    }
}

/// Full session screen
pub fn render(state: &SessionState) -> String {
    let mut lines = vec![format!(
        "Solana faucet    {}",
        render_network_toggle(state.selected_network)
    )];

    if let Some(error) = &state.validation_error {
        lines.push(format!("! {}", error));
    }

    let address = if state.address_text.is_empty() {
        "<your wallet address>"
    } else {
        state.address_text.as_str()
    };
    lines.push(format!("Address: {}", address));

    if state.request_in_flight {
        lines.push("Sending...".to_string());
    }

    if let Some(outcome) = &state.last_outcome {
        lines.push(render_outcome(outcome));
    }

    lines.push(DAILY_LIMIT_NOTICE.to_string());
    lines.join("\n")
}
