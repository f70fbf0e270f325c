//! Test helpers for integration tests

use std::time::Duration;

use anyhow::Result;
use glimesh_client::{AuthInfo, EventName, GlimeshConnection, GlimeshEvent};
use glimesh_common::ClientConfig;
use tokio::sync::broadcast;
use tokio::time::timeout;

use crate::MockGlimeshServer;

/// Join ref used by test connections
pub const TEST_JOIN_REF: &str = "test-join";

/// How long to wait for an expected event
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration pointing at the mock server
pub fn test_config(server: &MockGlimeshServer) -> ClientConfig {
    ClientConfig {
        join_ref: TEST_JOIN_REF.to_string(),
        ..ClientConfig::default()
    }
    .with_websocket_url(server.url())
    .with_request_timeout(Duration::from_secs(2))
}

/// Credentials carrying both a client id and a token
pub fn test_auth() -> AuthInfo {
    AuthInfo::default()
        .with_client_id("test-client")
        .with_access_token("test-token")
}

/// Connect and wait until the control channel is joined
pub async fn connect_joined(connection: &GlimeshConnection, use_token: bool) -> Result<()> {
    let opened = connection.emitter().once(EventName::Open);
    connection.connect(use_token).await?;

    match timeout(EVENT_TIMEOUT, opened).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => anyhow::bail!("Emitter dropped before Open"),
        Err(_) => anyhow::bail!("Timed out waiting for Open"),
    }
}

/// Wait for the next event with the given name
pub async fn wait_for(
    events: &mut broadcast::Receiver<GlimeshEvent>,
    name: EventName,
) -> Result<GlimeshEvent> {
    let wait = async {
        loop {
            match events.recv().await {
                Ok(event) if event.name == name => return Ok(event),
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => {
                    anyhow::bail!("Event channel closed while waiting for {name}")
                }
            }
        }
    };

    timeout(EVENT_TIMEOUT, wait)
        .await
        .map_err(|_| anyhow::anyhow!("Timed out waiting for {name}"))?
}
