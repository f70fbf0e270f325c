//! GraphQL subscriptions

use super::{PreparedRequest, MESSAGE_TOKENS};
use crate::events::EventName;
use crate::protocol::ReplyRef;
use glimesh_core::{ParamError, ParamName, Params};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which GraphQL subscription to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionKind {
    /// Channel updates (title, viewer count)
    Channel,
    /// Chat messages in a channel
    Chat,
    /// New followers of a streamer
    Followers,
}

impl SubscriptionKind {
    pub const ALL: [Self; 3] = [Self::Channel, Self::Chat, Self::Followers];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "Channel",
            Self::Chat => "Chat",
            Self::Followers => "Followers",
        }
    }

    #[must_use]
    pub const fn reply_ref(self) -> ReplyRef {
        match self {
            Self::Channel => ReplyRef::Channel,
            Self::Chat => ReplyRef::Chat,
            Self::Followers => ReplyRef::Follow,
        }
    }

    /// Event raised when the API acknowledges the subscription
    #[must_use]
    pub const fn ready_event(self) -> EventName {
        match self {
            Self::Channel => EventName::ChannelReady,
            Self::Chat => EventName::ChatReady,
            Self::Followers => EventName::FollowReady,
        }
    }

    /// Event raised for every push on the subscription
    #[must_use]
    pub const fn data_event(self) -> EventName {
        match self {
            Self::Channel => EventName::ChannelData,
            Self::Chat => EventName::ChatData,
            Self::Followers => EventName::FollowData,
        }
    }

    /// Fields returned when the caller does not choose any
    #[must_use]
    pub fn default_selection(self) -> String {
        match self {
            Self::Channel => "stream {countViewers}, title".to_string(),
            Self::Chat => format!(
                "id, user {{ username avatarUrl id }}, isSubscriptionMessage, message, {MESSAGE_TOKENS}"
            ),
            Self::Followers => "user { username }".to_string(),
        }
    }

    /// Validate params and render the subscription
    pub fn prepare(self, params: &Params, ret_val: Option<&str>) -> Result<PreparedRequest, ParamError> {
        let field = match self {
            Self::Channel => {
                let id = params.required(ParamName::ChannelId)?;
                format!("channel(id: {})", id.to_graphql())
            }
            Self::Chat => {
                let id = params.required(ParamName::ChannelId)?;
                format!("chatMessage(channelId: {})", id.to_graphql())
            }
            Self::Followers => {
                let id = params.required(ParamName::StreamerId)?;
                format!("followers(streamerId: {})", id.to_graphql())
            }
        };

        Ok(PreparedRequest::new(
            self.reply_ref(),
            field,
            ret_val,
            &self.default_selection(),
        ))
    }
}

impl fmt::Display for SubscriptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
