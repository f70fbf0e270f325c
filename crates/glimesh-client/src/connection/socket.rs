//! Socket tasks and the state they share with the connection handle

use crate::builder::Builder;
use crate::error::ProtocolError;
use crate::events::{EventEmitter, EventName, GlimeshEvent};
use crate::parser::GlimeshParser;
use crate::protocol::{Envelope, ReplyRef};
use dashmap::DashMap;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use parking_lot::{Mutex, RwLock};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{interval_at, Instant};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

pub(crate) type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;
type SocketSink = SplitSink<Socket, Message>;
type SocketStream = SplitStream<Socket>;

/// Reply to a mutation or query: its data, or the errors it carried
pub(crate) type ReplyOutcome = Result<Value, Value>;

/// State shared by the connection handle and its socket tasks
#[derive(Debug)]
pub(crate) struct Shared {
    pub parser: Mutex<GlimeshParser>,
    pub emitter: EventEmitter,
    /// Waiters per reply ref, oldest first
    pub pending: DashMap<String, VecDeque<oneshot::Sender<ReplyOutcome>>>,
    pub outbound: RwLock<Option<mpsc::Sender<Envelope>>>,
    pub heartbeat: Mutex<Option<AbortHandle>>,
    pub open: AtomicBool,
    pub using_token: AtomicBool,
}

impl Shared {
    pub fn new(event_buffer: usize) -> Self {
        Self {
            parser: Mutex::new(GlimeshParser::new()),
            emitter: EventEmitter::new(event_buffer),
            pending: DashMap::new(),
            outbound: RwLock::new(None),
            heartbeat: Mutex::new(None),
            open: AtomicBool::new(false),
            using_token: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Sender for the outbound queue, if a socket is open
    pub fn outbound(&self) -> Option<mpsc::Sender<Envelope>> {
        self.outbound.read().clone()
    }

    /// Register a waiter for the next reply on `reply_ref`
    pub fn await_reply(&self, reply_ref: ReplyRef) -> oneshot::Receiver<ReplyOutcome> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .entry(reply_ref.as_str().to_string())
            .or_default()
            .push_back(tx);
        rx
    }

    /// Parse a text frame, settle any waiter and emit the event
    pub fn handle_text(&self, text: &str) {
        let parsed = self.parser.lock().parse_data(text);
        let event = match parsed {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping undecodable frame");
                self.emitter
                    .emit(GlimeshEvent::error(json!({ "message": e.to_string() })));
                return;
            }
        };

        tracing::debug!(event = %event, "Received event");
        self.resolve_pending(&event);
        self.emitter.emit(event);
    }

    /// Report a binary frame, which the protocol never uses
    pub fn handle_binary(&self, len: usize) {
        let error = ProtocolError::BinaryFrame(len);
        tracing::warn!(error = %error, "Dropping binary frame");
        self.emitter
            .emit(GlimeshEvent::error(json!({ "message": error.to_string() })));
    }

    /// Hand a reply to the oldest waiter on its ref
    fn resolve_pending(&self, event: &GlimeshEvent) {
        let Some(reference) = event.reference.as_deref() else {
            return;
        };
        if !ReplyRef::from_str(reference).is_some_and(ReplyRef::expects_reply) {
            return;
        }
        let Some(mut waiters) = self.pending.get_mut(reference) else {
            tracing::debug!(reference, "Reply with nobody waiting");
            return;
        };

        let outcome = if event.name == EventName::Error {
            Err(event.data.clone())
        } else {
            Ok(event.data.clone())
        };

        // Replies come back in request order, so the oldest waiter owns this
        // one even if it already gave up
        let Some(waiter) = waiters.pop_front() else {
            tracing::debug!(reference, "Reply with nobody waiting");
            return;
        };
        if waiter.send(outcome).is_err() {
            tracing::debug!(reference, "Reply arrived after its request timed out");
        }
    }

    /// Tear down after the socket closed; only the first call has effect
    pub fn on_close(&self, was_clean: bool, code: Option<u16>) {
        if !self.open.swap(false, Ordering::SeqCst) {
            return;
        }

        if let Some(heartbeat) = self.heartbeat.lock().take() {
            heartbeat.abort();
        }
        *self.outbound.write() = None;
        // Dropping the senders fails every outstanding request
        self.pending.clear();

        tracing::info!(was_clean, code = ?code, "Connection closed");
        self.emitter.emit(GlimeshEvent::close(was_clean, code));
    }
}

/// Reader and writer of one socket
pub(crate) struct SocketTasks {
    pub reader: JoinHandle<()>,
    pub writer: JoinHandle<()>,
}

impl SocketTasks {
    pub fn abort(&self) {
        self.reader.abort();
        self.writer.abort();
    }
}

/// Feed inbound frames to the parser until the socket ends
pub(crate) async fn read_loop(shared: std::sync::Arc<Shared>, mut stream: SocketStream) {
    let mut was_clean = false;
    let mut code = None;

    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => shared.handle_text(&text),
            Ok(Message::Binary(data)) => shared.handle_binary(data.len()),
            Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => {
                tracing::trace!("Control frame received");
            }
            Ok(Message::Close(frame)) => {
                // Keep polling so the close handshake completes
                was_clean = true;
                code = frame.map(|f| u16::from(f.code));
                tracing::debug!(code = ?code, "Server closed the socket");
            }
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => break,
            Err(e) => {
                tracing::warn!(error = %e, "WebSocket error");
                shared
                    .emitter
                    .emit(GlimeshEvent::error(json!({ "message": e.to_string() })));
                break;
            }
        }
    }

    shared.on_close(was_clean, code);
}

/// Drain the outbound queue into the socket
pub(crate) async fn write_loop(mut sink: SocketSink, mut outbound: mpsc::Receiver<Envelope>) {
    while let Some(envelope) = outbound.recv().await {
        let json = match envelope.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, envelope = %envelope, "Failed to encode frame");
                continue;
            }
        };

        tracing::trace!(envelope = %envelope, "Sending frame");
        if let Err(e) = sink.send(Message::Text(json)).await {
            tracing::warn!(error = %e, "Failed to send frame");
            break;
        }
    }

    // Queue closed: say goodbye
    let _ = sink.close().await;
}

/// Send a heartbeat every `period`, starting one period from now
pub(crate) async fn heartbeat_loop(outbound: mpsc::Sender<Envelope>, builder: Builder, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);

    loop {
        ticker.tick().await;
        tracing::trace!("Sending heartbeat");
        if outbound.send(builder.build_heartbeat()).await.is_err() {
            break;
        }
    }
}
