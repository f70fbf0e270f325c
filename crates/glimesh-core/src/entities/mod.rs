//! API entities - typed views of the objects the Glimesh API returns
//!
//! Every field is optional: the server only returns what the request selected.

mod category;
mod channel;
mod chat;
mod connection;
mod follower;
mod moderation;
mod stream;
mod user;

pub use category::{Category, Subcategory, Tag};
pub use channel::{Channel, ChannelStatus};
pub use chat::{ChatMessage, ChatMessageMetadata, ChatMessageToken};
pub use connection::{Connection, Edge};
pub use follower::Follower;
pub use moderation::{ChannelBan, ChannelModerationLog};
pub use stream::Stream;
pub use user::User;
