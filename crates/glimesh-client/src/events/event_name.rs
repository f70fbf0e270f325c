//! Event names

use serde::{Deserialize, Serialize};
use std::fmt;

/// All event types a listener may receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventName {
    // Connection events
    /// Socket closed
    Close,
    /// Socket opened (the channel join is still pending)
    Connected,
    /// Socket error or an error reply from the API
    Error,
    /// Heartbeat acknowledged
    Heartbeat,
    /// Channel join acknowledged
    Open,

    // The API acknowledged a subscription and will push data when it happens
    ChatReady,
    ChannelReady,
    FollowReady,

    // Data pushed for an active subscription
    ChatData,
    ChannelData,
    FollowData,

    // Mutation replies
    BanData,
    CreateChatData,
    DeleteData,
    FollowUserData,
    LongTimeoutData,
    ShortTimeoutData,
    UnbanData,
    UnFollowData,
    UpdateStreamInfoData,

    /// Reply to any query
    QueryData,

    /// Frame the client could not classify
    Unknown,
}

impl EventName {
    /// Get the string representation of the event name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::Connected => "Connected",
            Self::Error => "Error",
            Self::Heartbeat => "Heartbeat",
            Self::Open => "Open",
            Self::ChatReady => "ChatReady",
            Self::ChannelReady => "ChannelReady",
            Self::FollowReady => "FollowReady",
            Self::ChatData => "ChatData",
            Self::ChannelData => "ChannelData",
            Self::FollowData => "FollowData",
            Self::BanData => "BanData",
            Self::CreateChatData => "CreateChatData",
            Self::DeleteData => "DeleteData",
            Self::FollowUserData => "FollowUserData",
            Self::LongTimeoutData => "LongTimeoutData",
            Self::ShortTimeoutData => "ShortTimeoutData",
            Self::UnbanData => "UnbanData",
            Self::UnFollowData => "UnFollowData",
            Self::UpdateStreamInfoData => "UpdateStreamInfoData",
            Self::QueryData => "QueryData",
            Self::Unknown => "Unknown",
        }
    }

    /// Ready events acknowledge a subscription request
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::ChatReady | Self::ChannelReady | Self::FollowReady)
    }

    /// Subscription data pushed by the API
    #[must_use]
    pub const fn is_subscription_data(self) -> bool {
        matches!(self, Self::ChatData | Self::ChannelData | Self::FollowData)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
