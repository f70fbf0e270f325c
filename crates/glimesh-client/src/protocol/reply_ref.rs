//! Reply references
//!
//! Every request carries a reference string that the server echoes in its
//! reply. The client sends from a closed set, so each reference maps
//! statically to the operation that produced it and the event it raises.

use crate::events::EventName;
use crate::operations::{Mutation, Query, SubscriptionKind};
use std::fmt;

/// What kind of request a reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// Channel join and heartbeats
    Control,
    Subscription(SubscriptionKind),
    Mutation(Mutation),
    Query(Query),
}

/// Known reference strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyRef {
    Open,
    Heartbeat,

    // Subscriptions
    Channel,
    Chat,
    Follow,

    // Mutations
    Ban,
    CreateChat,
    Delete,
    FollowUser,
    LongTimeout,
    ShortTimeout,
    Unban,
    Unfollow,
    UpdateStreamInfo,

    // Queries
    Categories,
    Category,
    ChannelQuery,
    Channels,
    Followers,
    HomepageChannels,
    Myself,
    User,
    Users,
}

impl ReplyRef {
    /// Every known reference
    pub const ALL: [Self; 23] = [
        Self::Open,
        Self::Heartbeat,
        Self::Channel,
        Self::Chat,
        Self::Follow,
        Self::Ban,
        Self::CreateChat,
        Self::Delete,
        Self::FollowUser,
        Self::LongTimeout,
        Self::ShortTimeout,
        Self::Unban,
        Self::Unfollow,
        Self::UpdateStreamInfo,
        Self::Categories,
        Self::Category,
        Self::ChannelQuery,
        Self::Channels,
        Self::Followers,
        Self::HomepageChannels,
        Self::Myself,
        Self::User,
        Self::Users,
    ];

    /// Get the wire string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open_resp",
            Self::Heartbeat => "heartbeat_resp",
            Self::Channel => "channel_resp",
            Self::Chat => "chat_resp",
            Self::Follow => "follow_resp",
            Self::Ban => "ban_resp",
            Self::CreateChat => "create_chat_resp",
            Self::Delete => "delete_resp",
            Self::FollowUser => "follow_user_resp",
            Self::LongTimeout => "long_timeout_resp",
            Self::ShortTimeout => "short_timeout_resp",
            Self::Unban => "unban_resp",
            Self::Unfollow => "unfollow_resp",
            Self::UpdateStreamInfo => "update_stream_info_resp",
            Self::Categories => "categories_resp",
            Self::Category => "category_resp",
            Self::ChannelQuery => "channelQ_resp",
            Self::Channels => "channels_resp",
            Self::Followers => "followers_resp",
            Self::HomepageChannels => "homepage_channels_resp",
            Self::Myself => "myself_resp",
            Self::User => "user_resp",
            Self::Users => "users_resp",
        }
    }

    /// Parse a reference from its wire string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Which request this reference answers
    #[must_use]
    pub const fn kind(self) -> RefKind {
        match self {
            Self::Open | Self::Heartbeat => RefKind::Control,
            Self::Channel => RefKind::Subscription(SubscriptionKind::Channel),
            Self::Chat => RefKind::Subscription(SubscriptionKind::Chat),
            Self::Follow => RefKind::Subscription(SubscriptionKind::Followers),
            Self::Ban => RefKind::Mutation(Mutation::BanUser),
            Self::CreateChat => RefKind::Mutation(Mutation::CreateChatMessage),
            Self::Delete => RefKind::Mutation(Mutation::DeleteChatMessage),
            Self::FollowUser => RefKind::Mutation(Mutation::Follow),
            Self::LongTimeout => RefKind::Mutation(Mutation::LongTimeout),
            Self::ShortTimeout => RefKind::Mutation(Mutation::ShortTimeout),
            Self::Unban => RefKind::Mutation(Mutation::UnbanUser),
            Self::Unfollow => RefKind::Mutation(Mutation::Unfollow),
            Self::UpdateStreamInfo => RefKind::Mutation(Mutation::UpdateStreamInfo),
            Self::Categories => RefKind::Query(Query::Categories),
            Self::Category => RefKind::Query(Query::Category),
            Self::ChannelQuery => RefKind::Query(Query::Channel),
            Self::Channels => RefKind::Query(Query::Channels),
            Self::Followers => RefKind::Query(Query::Followers),
            Self::HomepageChannels => RefKind::Query(Query::HomepageChannels),
            Self::Myself => RefKind::Query(Query::Myself),
            Self::User => RefKind::Query(Query::User),
            Self::Users => RefKind::Query(Query::Users),
        }
    }

    /// Event raised when the reply to this reference arrives
    #[must_use]
    pub const fn event_name(self) -> EventName {
        match self.kind() {
            RefKind::Control => match self {
                Self::Open => EventName::Open,
                _ => EventName::Heartbeat,
            },
            RefKind::Subscription(kind) => kind.ready_event(),
            RefKind::Mutation(mutation) => mutation.event_name(),
            RefKind::Query(_) => EventName::QueryData,
        }
    }

    /// Whether a caller waits on this reply
    #[must_use]
    pub const fn expects_reply(self) -> bool {
        matches!(self.kind(), RefKind::Mutation(_) | RefKind::Query(_))
    }
}

impl fmt::Display for ReplyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
