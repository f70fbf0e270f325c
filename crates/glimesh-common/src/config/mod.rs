//! Configuration structs

mod client_config;

pub use client_config::{ClientConfig, ConfigError, Environment, PROTOCOL_VERSION};
