//! Glimesh client entry point
//!
//! Run with:
//! ```bash
//! cargo run -p glimesh-client --bin glimesh-cli
//! ```
//!
//! Configuration is loaded from environment variables. Set
//! `GLIMESH_CHANNEL_ID` to follow a channel's chat.

use anyhow::Context;
use glimesh_client::{
    EventName, GlimeshConnection, GlimeshEvent, ParamName, Params, SubscriptionKind,
};
use glimesh_common::{try_init_tracing_with_config, ClientConfig, TracingConfig};
use glimesh_core::ChatMessage;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %format!("{e:#}"), "Client failed");
        std::process::exit(1);
    }
}

async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let channel_id = config.channel_id;
    let use_token = config.access_token.is_some();

    info!(env = ?config.env, endpoint = %config.websocket_url, use_token, "Configuration loaded");

    let connection = GlimeshConnection::from_config(config);
    let mut events = connection.events();
    let opened = connection.emitter().once(EventName::Open);

    connection
        .connect(use_token)
        .await
        .context("failed to connect to Glimesh")?;

    if opened.await.is_none() {
        anyhow::bail!("connection closed before the channel was joined");
    }

    if let Some(channel_id) = channel_id {
        let params = Params::new().with(ParamName::ChannelId, channel_id);
        connection
            .subscribe(SubscriptionKind::Chat, &params, None)
            .await
            .context("failed to subscribe to chat")?;
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    if event.name == EventName::Close {
                        info!(data = %event.data, "Connection closed by server");
                        return Ok(());
                    }
                    log_event(&event);
                }
                Err(RecvError::Lagged(n)) => warn!(skipped = n, "Event listener lagged"),
                Err(RecvError::Closed) => return Ok(()),
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    connection.close().await.context("failed to close connection")?;
    Ok(())
}

fn log_event(event: &GlimeshEvent) {
    match event.name {
        EventName::ChatData => match event.field_as::<ChatMessage>("chatMessage") {
            Ok(message) => info!(
                user = message.sender().unwrap_or("?"),
                text = %message.plain_text().unwrap_or_default(),
                "Chat message"
            ),
            Err(e) => warn!(error = %e, "Chat message with unexpected shape"),
        },
        EventName::Error => warn!(data = %event.data, "API error"),
        EventName::Heartbeat => tracing::trace!("Heartbeat acknowledged"),
        _ => info!(event = %event, data = %event.data, "Event"),
    }
}
