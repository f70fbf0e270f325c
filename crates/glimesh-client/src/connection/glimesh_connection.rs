//! Connection handle

use super::auth::AuthInfo;
use super::socket::{heartbeat_loop, read_loop, write_loop, Shared, SocketTasks};
use crate::builder::{Builder, DocumentKind};
use crate::error::{ClientError, ClientResult};
use crate::events::{EventEmitter, GlimeshEvent};
use crate::operations::{Mutation, PreparedRequest, Query, SubscriptionKind};
use crate::parser::ActiveSubscription;
use futures_util::StreamExt;
use glimesh_common::{ClientConfig, PROTOCOL_VERSION};
use glimesh_core::Params;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, Mutex};
use tokio::time::timeout;
use url::Url;

/// Capacity of the outbound frame queue
const OUTBOUND_BUFFER: usize = 64;

/// How long `close` waits for the server to finish the close handshake
const CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// A connection to the Glimesh GraphQL API
///
/// Every frame received is turned into a [`GlimeshEvent`] and broadcast to
/// listeners from [`events`](Self::events). Mutations and queries also
/// resolve with their reply data.
pub struct GlimeshConnection {
    auth: AuthInfo,
    config: ClientConfig,
    builder: Builder,
    shared: Arc<Shared>,
    tasks: Mutex<Option<SocketTasks>>,
}

impl GlimeshConnection {
    pub fn new(auth: AuthInfo, config: ClientConfig) -> Self {
        let builder = Builder::new(config.join_ref.clone());
        let shared = Arc::new(Shared::new(config.event_buffer));

        Self {
            auth,
            config,
            builder,
            shared,
            tasks: Mutex::new(None),
        }
    }

    /// Create a connection using the credentials in the config
    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(AuthInfo::from_config(&config), config)
    }

    /// Open the socket and join the control channel
    ///
    /// With `use_token` the access token authenticates the socket and
    /// mutations are allowed; otherwise the client id is used.
    pub async fn connect(&self, use_token: bool) -> ClientResult<()> {
        let mut tasks = self.tasks.lock().await;
        if self.shared.is_open() {
            return Err(ClientError::AlreadyConnected);
        }
        if let Some(stale) = tasks.take() {
            stale.abort();
        }

        let url = self.socket_url(use_token)?;
        tracing::info!(
            endpoint = %self.config.websocket_url,
            use_token,
            "Connecting to Glimesh"
        );

        let socket = match tokio_tungstenite::connect_async(url.as_str()).await {
            Ok((socket, _response)) => socket,
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect");
                self.shared
                    .emitter
                    .emit(GlimeshEvent::error(json!({ "message": e.to_string() })));
                return Err(e.into());
            }
        };
        let (sink, stream) = socket.split();
        let (outbound, queue) = mpsc::channel(OUTBOUND_BUFFER);

        self.shared.parser.lock().reset();
        self.shared.using_token.store(use_token, Ordering::SeqCst);
        *self.shared.outbound.write() = Some(outbound.clone());
        self.shared.open.store(true, Ordering::SeqCst);
        self.shared.emitter.emit(GlimeshEvent::connected());

        let writer = tokio::spawn(write_loop(sink, queue));
        let reader = tokio::spawn(read_loop(Arc::clone(&self.shared), stream));
        let heartbeat = tokio::spawn(heartbeat_loop(
            outbound.clone(),
            self.builder.clone(),
            self.config.heartbeat_interval(),
        ));
        *self.shared.heartbeat.lock() = Some(heartbeat.abort_handle());
        *tasks = Some(SocketTasks { reader, writer });

        tracing::debug!(join_ref = %self.builder.join_ref(), "Joining control channel");
        outbound
            .send(self.builder.build_join())
            .await
            .map_err(|_| ClientError::ConnectionClosed)
    }

    /// Close the socket
    pub async fn close(&self) -> ClientResult<()> {
        let Some(tasks) = self.tasks.lock().await.take() else {
            return Err(ClientError::NotConnected);
        };
        if !self.shared.is_open() {
            tasks.abort();
            return Err(ClientError::NotConnected);
        }

        tracing::info!("Closing connection");
        if let Some(heartbeat) = self.shared.heartbeat.lock().take() {
            heartbeat.abort();
        }
        // The writer sends the close frame once the queue is dropped
        *self.shared.outbound.write() = None;

        let SocketTasks { mut reader, writer } = tasks;
        if timeout(CLOSE_TIMEOUT, &mut reader).await.is_err() {
            tracing::warn!("Server did not finish the close handshake");
            reader.abort();
            self.shared.on_close(false, None);
        }
        writer.abort();
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.shared.is_open()
    }

    /// Whether the open socket was authenticated with the access token
    pub fn is_using_token(&self) -> bool {
        self.is_connected() && self.shared.using_token.load(Ordering::SeqCst)
    }

    /// Listen to every event from now on
    pub fn events(&self) -> broadcast::Receiver<GlimeshEvent> {
        self.shared.emitter.subscribe()
    }

    pub fn emitter(&self) -> &EventEmitter {
        &self.shared.emitter
    }

    /// Subscriptions the API has acknowledged on the current socket
    pub fn active_subscriptions(&self) -> Vec<ActiveSubscription> {
        self.shared.parser.lock().active_subscriptions().to_vec()
    }

    /// Start a subscription
    ///
    /// Returns once the request is sent. The matching ready event confirms
    /// it, and data then arrives as subscription data events.
    pub async fn subscribe(&self, kind: SubscriptionKind, params: &Params, ret_val: Option<&str>) -> ClientResult<()> {
        let outbound = self.shared.outbound().ok_or(ClientError::NotConnected)?;
        let request = kind.prepare(params, ret_val)?;

        tracing::debug!(subscription = %kind, field = %request.field, "Subscribing");
        outbound
            .send(self.builder.build(DocumentKind::Subscription, &request))
            .await
            .map_err(|_| ClientError::ConnectionClosed)
    }

    /// Run a mutation and wait for its reply data
    pub async fn create_mutation(&self, mutation: Mutation, params: &Params, ret_val: Option<&str>) -> ClientResult<Value> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }
        if !self.is_using_token() {
            return Err(ClientError::TokenRequired(mutation.as_str()));
        }
        let request = mutation.prepare(params, ret_val)?;
        self.request(DocumentKind::Mutation, request).await
    }

    /// Run a query and wait for its reply data
    pub async fn create_query(&self, query: Query, params: &Params, ret_val: Option<&str>) -> ClientResult<Value> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }
        if query.requires_token() && !self.is_using_token() {
            return Err(ClientError::TokenRequired(query.as_str()));
        }
        let request = query.prepare(params, ret_val)?;
        self.request(DocumentKind::Query, request).await
    }

    async fn request(&self, kind: DocumentKind, request: PreparedRequest) -> ClientResult<Value> {
        let outbound = self.shared.outbound().ok_or(ClientError::NotConnected)?;
        let reply = self.shared.await_reply(request.reply_ref);

        tracing::debug!(reference = %request.reply_ref, field = %request.field, "Sending request");
        outbound
            .send(self.builder.build(kind, &request))
            .await
            .map_err(|_| ClientError::ConnectionClosed)?;

        let limit = self.config.request_timeout();
        match timeout(limit, reply).await {
            Ok(Ok(Ok(data))) => Ok(data),
            Ok(Ok(Err(errors))) => Err(ClientError::Api(errors)),
            Ok(Err(_)) => Err(ClientError::ConnectionClosed),
            Err(_) => {
                tracing::warn!(reference = %request.reply_ref, "Request timed out");
                Err(ClientError::Timeout(limit))
            }
        }
    }

    /// `<websocket_url>?vsn=2.0.0&token=..` or `..&client_id=..`
    fn socket_url(&self, use_token: bool) -> ClientResult<Url> {
        let (key, credential) = if use_token {
            let token = self
                .auth
                .access_token
                .as_deref()
                .ok_or(ClientError::MissingCredentials("access token"))?;
            ("token", token)
        } else {
            let client_id = self
                .auth
                .client_id
                .as_deref()
                .ok_or(ClientError::MissingCredentials("client id"))?;
            ("client_id", client_id)
        };

        let mut url = Url::parse(&self.config.websocket_url)?;
        url.query_pairs_mut()
            .append_pair("vsn", PROTOCOL_VERSION)
            .append_pair(key, credential);
        Ok(url)
    }
}

impl Drop for GlimeshConnection {
    fn drop(&mut self) {
        if let Some(heartbeat) = self.shared.heartbeat.lock().take() {
            heartbeat.abort();
        }
        if let Some(tasks) = self.tasks.get_mut().take() {
            tasks.abort();
        }
    }
}

impl std::fmt::Debug for GlimeshConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlimeshConnection")
            .field("auth", &self.auth)
            .field("endpoint", &self.config.websocket_url)
            .field("join_ref", &self.builder.join_ref())
            .field("connected", &self.is_connected())
            .finish()
    }
}
