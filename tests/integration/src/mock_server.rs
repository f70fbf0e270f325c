//! Mock Absinthe endpoint
//!
//! Speaks just enough of the Phoenix channel protocol to drive the client:
//! joins and heartbeats are acknowledged, subscription documents get a
//! subscription id and every other document is answered with canned data.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Path the client connects to
pub const SOCKET_PATH: &str = "/api/graph/websocket";

/// Something the server sends without being asked
#[derive(Debug, Clone)]
enum ServerPush {
    Frame(String),
    Close(u16),
}

#[derive(Default)]
struct Behaviour {
    /// Refs that are never answered
    silent: HashSet<String>,
    /// Refs answered with these GraphQL errors
    errors: HashMap<String, Value>,
    /// Refs answered with this data instead of the echo
    data: HashMap<String, Value>,
}

struct MockState {
    behaviour: Mutex<Behaviour>,
    received: Mutex<Vec<Value>>,
    connections: Mutex<Vec<HashMap<String, String>>>,
    subscription_ids: Mutex<Vec<String>>,
    next_subscription: AtomicU64,
    pushes: broadcast::Sender<ServerPush>,
}

/// A running mock server
pub struct MockGlimeshServer {
    pub addr: SocketAddr,
    state: Arc<MockState>,
    _handle: JoinHandle<()>,
}

impl MockGlimeshServer {
    /// Start a server on a free local port
    pub async fn start() -> Result<Self> {
        let (pushes, _) = broadcast::channel(64);
        let state = Arc::new(MockState {
            behaviour: Mutex::new(Behaviour::default()),
            received: Mutex::new(Vec::new()),
            connections: Mutex::new(Vec::new()),
            subscription_ids: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            pushes,
        });

        let app = Router::new()
            .route(SOCKET_PATH, get(socket_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// WebSocket URL of the server
    pub fn url(&self) -> String {
        format!("ws://{}{SOCKET_PATH}", self.addr)
    }

    /// Never answer requests with this ref
    pub fn ignore_ref(&self, reference: &str) {
        self.state.behaviour.lock().silent.insert(reference.to_string());
    }

    /// Answer requests with this ref with GraphQL errors
    pub fn fail_ref(&self, reference: &str, errors: Value) {
        self.state
            .behaviour
            .lock()
            .errors
            .insert(reference.to_string(), errors);
    }

    /// Answer requests with this ref with fixed data
    pub fn respond_with(&self, reference: &str, data: Value) {
        self.state
            .behaviour
            .lock()
            .data
            .insert(reference.to_string(), data);
    }

    /// Every frame received so far, decoded
    pub fn received(&self) -> Vec<Value> {
        self.state.received.lock().clone()
    }

    /// Frames received with the given ref
    pub fn received_with_ref(&self, reference: &str) -> Vec<Value> {
        self.received()
            .into_iter()
            .filter(|frame| frame[1] == reference)
            .collect()
    }

    /// Query string params of every connection, in order
    pub fn connections(&self) -> Vec<HashMap<String, String>> {
        self.state.connections.lock().clone()
    }

    /// Subscription ids handed out, in order
    pub fn subscription_ids(&self) -> Vec<String> {
        self.state.subscription_ids.lock().clone()
    }

    /// Push subscription data to every connected client
    pub fn push_subscription_data(&self, subscription_id: &str, data: Value) {
        let frame = json!([
            null,
            null,
            subscription_id,
            "subscription:data",
            { "result": { "data": data }, "subscriptionId": subscription_id }
        ]);
        self.push_raw(&frame.to_string());
    }

    /// Send a raw text frame to every connected client
    pub fn push_raw(&self, frame: &str) {
        let _ = self.state.pushes.send(ServerPush::Frame(frame.to_string()));
    }

    /// Close every connection with the given code
    pub fn close_all(&self, code: u16) {
        let _ = self.state.pushes.send(ServerPush::Close(code));
    }
}

async fn socket_handler(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    state.connections.lock().push(params);
    ws.on_upgrade(move |socket| handle_socket(state, socket))
}

async fn handle_socket(state: Arc<MockState>, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let mut pushes = state.pushes.subscribe();

    loop {
        tokio::select! {
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    for reply in state.respond(&text) {
                        if sink.send(Message::Text(reply.into())).await.is_err() {
                            return;
                        }
                    }
                }
                // Keep reading after a close so the handshake completes
                Some(Ok(_)) => {}
                Some(Err(_)) | None => return,
            },
            push = pushes.recv() => match push {
                Ok(ServerPush::Frame(frame)) => {
                    if sink.send(Message::Text(frame.into())).await.is_err() {
                        return;
                    }
                }
                Ok(ServerPush::Close(code)) => {
                    let frame = CloseFrame { code, reason: "".into() };
                    if sink.send(Message::Close(Some(frame))).await.is_err() {
                        return;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => return,
            },
        }
    }
}

impl MockState {
    /// Replies owed for one inbound frame
    fn respond(&self, text: &str) -> Vec<String> {
        let Ok(frame) = serde_json::from_str::<Value>(text) else {
            tracing::warn!(frame = text, "Mock server received invalid JSON");
            return Vec::new();
        };
        self.received.lock().push(frame.clone());

        let join_ref = frame[0].clone();
        let reference = frame[1].as_str().unwrap_or_default().to_string();
        let topic = frame[2].clone();
        let event = frame[3].as_str().unwrap_or_default();

        let response = match event {
            "phx_join" | "heartbeat" => json!({}),
            "doc" => {
                let behaviour = self.behaviour.lock();
                if behaviour.silent.contains(&reference) {
                    return Vec::new();
                }
                let query = frame[4]["query"].as_str().unwrap_or_default();

                if let Some(errors) = behaviour.errors.get(&reference) {
                    json!({ "errors": errors })
                } else if query.starts_with("subscription") {
                    let n = self.next_subscription.fetch_add(1, Ordering::SeqCst);
                    let id = format!("__absinthe__:doc:-{n}");
                    self.subscription_ids.lock().push(id.clone());
                    json!({ "subscriptionId": id })
                } else if let Some(data) = behaviour.data.get(&reference) {
                    json!({ "data": data })
                } else {
                    json!({ "data": { "query": query } })
                }
            }
            _ => return Vec::new(),
        };

        let reply = json!([join_ref, reference, topic, "phx_reply", { "response": response, "status": "ok" }]);
        vec![reply.to_string()]
    }
}
