//! Faucet request controller.
//!
//! Owns the session state and is its only writer. User intents and request
//! completions become [`Event`]s that are applied strictly one at a time. At most one airdrop is outstanding per session; it runs in a
//! spawned task whose result is applied as `RequestSucceeded` or
//! `RequestFailed`. A running session ends on `Close` or once every
//! [`ControllerHandle`] has been dropped.

use crate::address::{valid_recipient, Pubkey};
use crate::error::{FaucetError, FaucetResult};
use crate::network::Network;
use crate::rpc::{AirdropClient, AIRDROP_LAMPORTS};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, trace, warn};

/// Inline message shown when the address fails validation
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address!";

/// The one message any failed airdrop is reported with
pub const FAILURE_MESSAGE: &str = "An error occurred, please try again later!";

/// Result of a completed airdrop request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        transaction_ref: String,
        network: Network,
    },
    Failure {
        message: String,
    },
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub selected_network: Network,
    pub address_text: String,
    pub validation_error: Option<String>,
    pub request_in_flight: bool,
    pub last_outcome: Option<Outcome>,
}

/// Where the controller is in the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting { network: Network },
}

/// Inputs to the controller
#[derive(Debug)]
pub enum Event {
    EditAddress(String),
    SelectNetwork(Network),
    Submit,
    RequestSucceeded(String),
    RequestFailed(FaucetError),
    /// The session is going away
    Close,
}

/// What a `submit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// One airdrop request is now outstanding against `network`
    Dispatched { network: Network },
    /// The address failed validation; nothing was sent
    Invalid,
    /// A request is already outstanding; nothing changed
    Busy,
}

enum Next {
    Completed(Result<FaucetResult<String>, oneshot::error::RecvError>),
    Intent(Option<Event>),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    network: Network,
    recipient: Pubkey,
}

/// Cloneable sender for user intents, handed to the presentation layer.
#[derive(Clone)]
pub struct ControllerHandle {
    events: Option<mpsc::UnboundedSender<Event>>,
}

impl ControllerHandle {
    /// Returns false once the session has ended.
    pub fn edit_address(&self, text: impl Into<String>) -> bool {
        self.send(Event::EditAddress(text.into()))
    }

    pub fn select_network(&self, network: Network) -> bool {
        self.send(Event::SelectNetwork(network))
    }

    pub fn submit(&self) -> bool {
        self.send(Event::Submit)
    }

    pub fn close(&self) -> bool {
        self.send(Event::Close)
    }

    fn send(&self, event: Event) -> bool {
        self.events
            .as_ref()
            .map_or(false, |events| events.send(event).is_ok())
    }
}

/// Faucet request controller
pub struct FaucetController {
    state: SessionState,
    in_flight: Option<InFlight>,
    client: Arc<dyn AirdropClient>,
    /// Dropped when `run` starts so the loop sees the last handle go away
    intents_tx: Option<mpsc::UnboundedSender<Event>>,
    intents_rx: mpsc::UnboundedReceiver<Event>,
    pending: Option<oneshot::Receiver<FaucetResult<String>>>,
    state_tx: watch::Sender<SessionState>,
}

impl FaucetController {
    /// New session on the default network (DevNet)
    pub fn new(client: Arc<dyn AirdropClient>) -> Self {
        Self::with_network(client, Network::default())
    }

    pub fn with_network(client: Arc<dyn AirdropClient>, network: Network) -> Self {
        let state = SessionState {
            selected_network: network,
            ..SessionState::default()
        };
        let (intents_tx, intents_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            state,
            in_flight: None,
            client,
            intents_tx: Some(intents_tx),
            intents_rx,
            pending: None,
            state_tx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.in_flight {
            Some(InFlight { network, .. }) => Phase::Requesting { network },
            None => Phase::Idle,
        }
    }

    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            events: self.intents_tx.clone(),
        }
    }

    /// Snapshots of the state, one per applied transition (latest wins).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn edit_address(&mut self, text: &str) {
        self.state.address_text = text.trim().to_string();
        self.state.validation_error = None;
        trace!("Address edited: {:?}", self.state.address_text);
        self.publish();
    }

    /// Does not affect a request that is already outstanding.
    pub fn select_network(&mut self, network: Network) {
        self.state.selected_network = network;
        debug!("Selected network: {}", network);
        self.publish();
    }

    /// Validates the current address and, if it passes, dispatches one airdrop.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self) -> Submission {
        if let Some(in_flight) = self.in_flight {
            debug!("Submit ignored, request to {} still pending", in_flight.network);
            return Submission::Busy;
        }

        let Some(recipient) = valid_recipient(&self.state.address_text) else {
            self.state.validation_error = Some(INVALID_ADDRESS_MESSAGE.to_string());
            self.publish();
            return Submission::Invalid;
        };

        let network = self.state.selected_network;
        self.state.validation_error = None;
        self.state.request_in_flight = true;
        self.in_flight = Some(InFlight { network, recipient });

        info!("Requesting {} lamports for {} on {}", AIRDROP_LAMPORTS, recipient, network);

        let client = Arc::clone(&self.client);
        let (done_tx, done_rx) = oneshot::channel();
        self.pending = Some(done_rx);
        tokio::spawn(async move {
            let result = client
                .request_airdrop(network, &recipient, AIRDROP_LAMPORTS)
                .await;
            if done_tx.send(result).is_err() {
                debug!("Session closed before airdrop for {} resolved", recipient);
            }
        });

        self.publish();
        Submission::Dispatched { network }
    }

    pub fn request_succeeded(&mut self, transaction_ref: String) {
        let Some(in_flight) = self.in_flight.take() else {
            warn!("Ignoring airdrop success with no request in flight");
            return;
        };
        self.pending = None;

        info!("Airdrop on {} resolved: {}", in_flight.network, transaction_ref);
        self.resolve(Outcome::Success {
            transaction_ref,
            network: in_flight.network,
        });
    }

    /// The error is logged; the user only ever sees [`FAILURE_MESSAGE`].
    pub fn request_failed(&mut self, error: FaucetError) {
        let Some(in_flight) = self.in_flight.take() else {
            warn!("Ignoring airdrop failure with no request in flight: {}", error);
            return;
        };
        self.pending = None;

        warn!(
            "Airdrop for {} on {} failed: {}",
            in_flight.recipient, in_flight.network, error
        );
        self.resolve(Outcome::Failure {
            message: FAILURE_MESSAGE.to_string(),
        });
    }

    /// Applies one event. Returns false when the event ends the session.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::EditAddress(text) => self.edit_address(&text),
            Event::SelectNetwork(network) => self.select_network(network),
            Event::Submit => {
                self.submit();
            }
            Event::RequestSucceeded(signature) => self.request_succeeded(signature),
            Event::RequestFailed(error) => self.request_failed(error),
            Event::Close => return false,
        }
        true
    }

    /// Waits for the next user intent or request completion and applies it.
    ///
    /// Returns false when the session has ended.
    pub async fn process_next(&mut self) -> bool {
        let next = match self.pending.as_mut() {
            Some(pending) => tokio::select! {
                result = pending => Next::Completed(result),
                intent = self.intents_rx.recv() => Next::Intent(intent),
            },
            None => Next::Intent(self.intents_rx.recv().await),
        };

        let event = match next {
            Next::Completed(Ok(Ok(signature))) => Event::RequestSucceeded(signature),
            Next::Completed(Ok(Err(error))) => Event::RequestFailed(error),
            Next::Completed(Err(_)) => Event::RequestFailed(FaucetError::RpcError(
                "request task ended without a result".to_string(),
            )),
            Next::Intent(Some(intent)) => intent,
            Next::Intent(None) => return false,
        };
        self.apply(event)
    }

    /// Processes events until the outstanding request, if any, has resolved.
    ///
    /// Returns `None` if the session ends while the request is still pending.
    pub async fn wait_for_outcome(&mut self) -> Option<&Outcome> {
        while self.in_flight.is_some() {
            if !self.process_next().await {
                return None;
            }
        }
        self.state.last_outcome.as_ref()
    }

    /// Runs the session until it is closed, or every handle is dropped, and
    /// returns its final state.
    pub async fn run(mut self) -> SessionState {
        self.intents_tx = None;
        while self.process_next().await {}
        if let Some(in_flight) = self.in_flight {
            debug!("Session closed with a request pending on {}", in_flight.network);
        }
        info!("Faucet session closed");
        self.state
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.state.last_outcome = Some(outcome);
        self.state.request_in_flight = false;
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}
