//! Connection to the Glimesh API
//!
//! One WebSocket per [`GlimeshConnection`], driven by three tasks: a reader
//! feeding the parser, a writer draining the outbound queue and a heartbeat.

mod auth;
mod glimesh_connection;
mod socket;

pub use auth::AuthInfo;
pub use glimesh_connection::GlimeshConnection;
