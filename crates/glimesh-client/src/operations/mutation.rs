//! GraphQL mutations
//!
//! Mutations need write access, so they are only allowed on a connection
//! opened with an access token.

use super::PreparedRequest;
use crate::events::EventName;
use crate::protocol::ReplyRef;
use glimesh_core::{ParamError, ParamName, ParamValue, Params};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    BanUser,
    CreateChatMessage,
    DeleteChatMessage,
    Follow,
    LongTimeout,
    ShortTimeout,
    UnbanUser,
    Unfollow,
    UpdateStreamInfo,
}

impl Mutation {
    pub const ALL: [Self; 9] = [
        Self::BanUser,
        Self::CreateChatMessage,
        Self::DeleteChatMessage,
        Self::Follow,
        Self::LongTimeout,
        Self::ShortTimeout,
        Self::UnbanUser,
        Self::Unfollow,
        Self::UpdateStreamInfo,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BanUser => "BanUser",
            Self::CreateChatMessage => "CreateChatMessage",
            Self::DeleteChatMessage => "DeleteChatMessage",
            Self::Follow => "Follow",
            Self::LongTimeout => "LongTimeout",
            Self::ShortTimeout => "ShortTimeout",
            Self::UnbanUser => "UnbanUser",
            Self::Unfollow => "Unfollow",
            Self::UpdateStreamInfo => "UpdateStreamInfo",
        }
    }

    #[must_use]
    pub const fn reply_ref(self) -> ReplyRef {
        match self {
            Self::BanUser => ReplyRef::Ban,
            Self::CreateChatMessage => ReplyRef::CreateChat,
            Self::DeleteChatMessage => ReplyRef::Delete,
            Self::Follow => ReplyRef::FollowUser,
            Self::LongTimeout => ReplyRef::LongTimeout,
            Self::ShortTimeout => ReplyRef::ShortTimeout,
            Self::UnbanUser => ReplyRef::Unban,
            Self::Unfollow => ReplyRef::Unfollow,
            Self::UpdateStreamInfo => ReplyRef::UpdateStreamInfo,
        }
    }

    /// Event raised when the reply arrives
    #[must_use]
    pub const fn event_name(self) -> EventName {
        match self {
            Self::BanUser => EventName::BanData,
            Self::CreateChatMessage => EventName::CreateChatData,
            Self::DeleteChatMessage => EventName::DeleteData,
            Self::Follow => EventName::FollowUserData,
            Self::LongTimeout => EventName::LongTimeoutData,
            Self::ShortTimeout => EventName::ShortTimeoutData,
            Self::UnbanUser => EventName::UnbanData,
            Self::Unfollow => EventName::UnFollowData,
            Self::UpdateStreamInfo => EventName::UpdateStreamInfoData,
        }
    }

    /// Params that must be present
    #[must_use]
    pub const fn required_params(self) -> &'static [ParamName] {
        match self {
            Self::BanUser | Self::UnbanUser | Self::LongTimeout | Self::ShortTimeout => {
                &[ParamName::ChannelId, ParamName::UserId]
            }
            Self::CreateChatMessage => &[ParamName::ChannelId, ParamName::Message],
            Self::DeleteChatMessage => &[ParamName::ChannelId, ParamName::MessageId],
            Self::Follow => &[ParamName::StreamerId, ParamName::EnableNotifications],
            Self::Unfollow => &[ParamName::StreamerId],
            Self::UpdateStreamInfo => &[ParamName::ChannelId, ParamName::Title],
        }
    }

    #[must_use]
    pub const fn default_selection(self) -> &'static str {
        match self {
            Self::BanUser | Self::UnbanUser => "updatedAt, user {username}",
            Self::CreateChatMessage => "message, id",
            Self::DeleteChatMessage | Self::LongTimeout | Self::ShortTimeout => "action, id",
            Self::Follow | Self::Unfollow => "id, streamer {username}",
            Self::UpdateStreamInfo => "id, title",
        }
    }

    /// Validate params and render the mutation
    pub fn prepare(self, params: &Params, ret_val: Option<&str>) -> Result<PreparedRequest, ParamError> {
        params.require(self.required_params())?;
        let literal = |name: ParamName| params.required(name).map(ParamValue::to_graphql);
        let string = |name: ParamName| params.required(name).map(ParamValue::to_string_literal);

        let field = match self {
            Self::BanUser => format!(
                "banUser(channelId: {}, userId: {})",
                literal(ParamName::ChannelId)?,
                literal(ParamName::UserId)?
            ),
            Self::CreateChatMessage => format!(
                "createChatMessage(channelId: {}, message: {{message: {}}})",
                literal(ParamName::ChannelId)?,
                string(ParamName::Message)?
            ),
            Self::DeleteChatMessage => format!(
                "deleteChatMessage(channelId: {}, messageId: {})",
                literal(ParamName::ChannelId)?,
                literal(ParamName::MessageId)?
            ),
            Self::Follow => format!(
                "follow(liveNotifications: {}, streamerId: {})",
                literal(ParamName::EnableNotifications)?,
                literal(ParamName::StreamerId)?
            ),
            Self::LongTimeout => format!(
                "longTimeoutUser(channelId: {}, userId: {})",
                literal(ParamName::ChannelId)?,
                literal(ParamName::UserId)?
            ),
            Self::ShortTimeout => format!(
                "shortTimeoutUser(channelId: {}, userId: {})",
                literal(ParamName::ChannelId)?,
                literal(ParamName::UserId)?
            ),
            Self::UnbanUser => format!(
                "unbanUser(channelId: {}, userId: {})",
                literal(ParamName::ChannelId)?,
                literal(ParamName::UserId)?
            ),
            Self::Unfollow => format!("unfollow(streamerId: {})", literal(ParamName::StreamerId)?),
            Self::UpdateStreamInfo => format!(
                "updateStreamInfo(channelId: {}, title: {})",
                literal(ParamName::ChannelId)?,
                string(ParamName::Title)?
            ),
        };

        Ok(PreparedRequest::new(
            self.reply_ref(),
            field,
            ret_val,
            self.default_selection(),
        ))
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
