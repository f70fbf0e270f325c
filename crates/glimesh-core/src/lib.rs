//! # glimesh-core
//!
//! Value shapes shared by the client: typed API entities, request parameters
//! and their presence validation. No I/O happens in this crate.

pub mod entities;
pub mod error;
pub mod params;

// Re-export commonly used types at crate root
pub use entities::{
    Category, Channel, ChannelBan, ChannelModerationLog, ChannelStatus, ChatMessage,
    ChatMessageMetadata, ChatMessageToken, Connection, Edge, Follower, Stream, Subcategory, Tag,
    User,
};
pub use error::ParamError;
pub use params::{ParamName, ParamValue, Params};
