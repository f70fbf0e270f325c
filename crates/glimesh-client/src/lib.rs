//! # glimesh-client
//!
//! WebSocket client for the Glimesh GraphQL API, speaking the Phoenix
//! channel protocol used by Absinthe subscriptions.

pub mod builder;
pub mod connection;
pub mod error;
pub mod events;
pub mod operations;
pub mod parser;
pub mod protocol;

pub use builder::{Builder, DocumentKind};
pub use connection::{AuthInfo, GlimeshConnection};
pub use error::{ClientError, ClientResult, ProtocolError};
pub use events::{EventEmitter, EventName, GlimeshEvent};
pub use operations::{Mutation, PreparedRequest, Query, SubscriptionKind, MESSAGE_TOKENS};
pub use parser::{ActiveSubscription, GlimeshParser};
pub use protocol::{Envelope, PhxEvent, RefKind, ReplyRef, Topic};

pub use glimesh_core::{ParamError, ParamName, ParamValue, Params};
