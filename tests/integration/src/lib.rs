//! Integration test utilities for the Glimesh client
//!
//! Runs the client against a local mock of the Absinthe WebSocket endpoint.

pub mod helpers;
pub mod mock_server;

pub use helpers::*;
pub use mock_server::*;
