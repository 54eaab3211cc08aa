//! Mock cluster: a local axum server speaking just enough JSON-RPC.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::scalar::Scalar;
use serde_json::{json, Value};
use sol_faucet::Pubkey;
use std::sync::{Arc, Mutex};

/// How the mock cluster answers every request
#[derive(Clone, Debug)]
pub enum Reply {
    Signature(&'static str),
    RpcError(&'static str),
    Status(StatusCode),
    NullResult,
    NotJson,
}

#[derive(Clone)]
struct MockCluster {
    reply: Reply,
    seen: Arc<Mutex<Vec<Value>>>,
}

pub struct ClusterHandle {
    pub url: String,
    seen: Arc<Mutex<Vec<Value>>>,
}

impl ClusterHandle {
    /// JSON-RPC bodies received so far
    pub fn requests(&self) -> Vec<Value> {
        self.seen.lock().unwrap().clone()
    }
}

async fn rpc_handler(State(cluster): State<MockCluster>, Json(body): Json<Value>) -> Response {
    cluster.seen.lock().unwrap().push(body.clone());
    let id = body.get("id").cloned().unwrap_or(Value::Null);

    match cluster.reply {
        Reply::Signature(sig) => Json(json!({ "jsonrpc": "2.0", "id": id, "result": sig })).into_response(),
        Reply::RpcError(message) => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32603, "message": message }
        }))
        .into_response(),
        Reply::Status(status) => (status, "rejected").into_response(),
        Reply::NullResult => Json(json!({ "jsonrpc": "2.0", "id": id, "result": null })).into_response(),
        Reply::NotJson => "<html>maintenance</html>".into_response(),
    }
}

/// Starts a mock cluster on an ephemeral loopback port.
pub async fn spawn_cluster(reply: Reply) -> ClusterHandle {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/", post(rpc_handler))
        .with_state(MockCluster {
            reply,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ClusterHandle {
        url: format!("http://{}/", addr),
        seen,
    }
}

/// A base58 on-curve address derived from `seed`
pub fn wallet_address(seed: u64) -> String {
    let point = ED25519_BASEPOINT_POINT * Scalar::from(seed);
    Pubkey::new(point.compress().to_bytes()).to_string()
}
