//! Client error types

use glimesh_core::ParamError;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// An inbound frame that could not be decoded
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Not JSON, or not a 5 element frame
    #[error("Malformed frame: {0}")]
    MalformedFrame(#[from] serde_json::Error),

    /// Binary frames are not part of the protocol
    #[error("Unexpected binary frame ({0} bytes)")]
    BinaryFrame(usize),
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Already connected")]
    AlreadyConnected,

    #[error("Not connected")]
    NotConnected,

    /// No client id or access token for the requested connection mode
    #[error("Missing credentials: {0} is not set")]
    MissingCredentials(&'static str),

    /// Operation is only allowed on a connection opened with an access token
    #[error("{0} requires a connection opened with an access token")]
    TokenRequired(&'static str),

    #[error(transparent)]
    MissingParam(#[from] ParamError),

    #[error("No reply within {0:?}")]
    Timeout(Duration),

    /// The API answered with errors
    #[error("API error: {0}")]
    Api(Value),

    /// The socket closed before the reply arrived
    #[error("Connection closed")]
    ConnectionClosed,

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl ClientError {
    /// Get error code for logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyConnected => "ALREADY_CONNECTED",
            Self::NotConnected => "NOT_CONNECTED",
            Self::MissingCredentials(_) => "MISSING_CREDENTIALS",
            Self::TokenRequired(_) => "TOKEN_REQUIRED",
            Self::MissingParam(e) => e.code(),
            Self::Timeout(_) => "TIMEOUT",
            Self::Api(_) => "API_ERROR",
            Self::ConnectionClosed => "CONNECTION_CLOSED",
            Self::WebSocket(_) => "WEBSOCKET_ERROR",
            Self::Url(_) => "INVALID_URL",
            Self::Protocol(_) => "PROTOCOL_ERROR",
        }
    }
}

/// Client result type
pub type ClientResult<T> = Result<T, ClientError>;
