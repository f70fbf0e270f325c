//! Inbound frame classification

mod active_subscription;
mod glimesh_parser;

pub use active_subscription::ActiveSubscription;
pub use glimesh_parser::GlimeshParser;
